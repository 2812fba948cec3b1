pub mod cards;
pub mod index;
pub mod records;

pub use cards::{AreaCard, CardSets, NeighborhoodCard};
pub use index::RegionIndex;
pub use records::{Area, Neighborhood};

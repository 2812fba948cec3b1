pub mod region_file;

pub use region_file::{RawRegionFeature, RegionFile, RegionFileError};

pub mod error;
pub mod select;

pub use error::{Error, Result};
pub use select::{
    floyd_rivest, floyd_rivest_in_place, quickselect, quickselect_in_place,
    quickselect_in_place_with_rng,
};

pub mod pentrix;
pub mod ptp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeMap, BTreeSet, HashSet},
            ops::{Add, Sub}
        };
    }
}

pub mod prelude {
    pub use super::pentrix::prelude::*;
    pub use super::ptp_server::*;
    pub use super::utils::prelude::*;
}

pub mod entities {
    pub use silly_entities::{comment::*, id::*, slug::*, time::*};
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

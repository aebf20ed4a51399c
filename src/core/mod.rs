// Domain-layer modules and shared errors/models
pub mod schema {
    pub use crate::schema::*;
}

pub mod encoder {
    pub use crate::encoder::*;
}

pub mod generator {
    pub use crate::generator::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}

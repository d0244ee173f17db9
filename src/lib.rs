pub mod alerts;
pub mod api;
pub mod drivers;
pub mod fetch;
pub mod stops;

//! renders origin-destination travel survey data as map layers: flow lines
//! between municipalities and choropleth coloring of trip generation and
//! attraction.

pub mod app;
pub mod input;
pub mod output;
pub mod session;

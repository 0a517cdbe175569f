pub mod featherer_factory;
mod gaussian;
pub mod gaussian_edge_featherer;

pub mod edge_featherer;
pub mod feather_spec;
pub mod mask;

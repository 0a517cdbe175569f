use crate::feathering::domain::edge_featherer::EdgeFeatherer;
use crate::feathering::domain::feather_spec::FeatherSpec;

use super::gaussian_edge_featherer::GaussianEdgeFeatherer;

/// Returns a featherer for `spec`, or `None` when feathering is switched off.
pub fn create_featherer(spec: FeatherSpec) -> Option<Box<dyn EdgeFeatherer>> {
    if spec.is_enabled() {
        log::info!(
            "Feathering border seam at {}\u{2030} of source width",
            spec.edge_per_mille
        );
        Some(Box::new(GaussianEdgeFeatherer::new(spec)))
    } else {
        log::info!("Feathering disabled");
        None
    }
}

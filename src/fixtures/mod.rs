pub mod block_specs;
pub mod raw_specs;
pub mod registry;
pub mod test_vector;

use registry::Registry;

/// Register every fixture in generation order.
pub fn register_all(registry: &mut Registry) {
    block_specs::register(registry);
    raw_specs::register_filter_utils(registry);
    block_specs::register_designed(registry);
    raw_specs::register_sources(registry);
}

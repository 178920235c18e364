use nodeid_filter::{SimInstance, api};

fn main() {
    let instance = SimInstance::new();
    assert!((0..33).all(|id| api::is_connectable(&instance, id)));
    assert_eq!(instance.node_id_filter().denied_count(), 0);
}

use nodeid_filter::{Instance, api, bucket_count};

const NETWORK_SIZE: usize = 6;

type Device = Instance<NETWORK_SIZE, { bucket_count(NETWORK_SIZE) }>;

// Splits six devices into {0, 1, 2} and {3, 4, 5}.
fn partition(devices: &mut [Device; NETWORK_SIZE]) {
    for (id, device) in devices.iter_mut().enumerate() {
        let others = if id < 3 { 3..6 } else { 0..3 };
        for other in others {
            api::deny(device, other);
        }
    }
}

fn main() {
    let mut devices: [Device; NETWORK_SIZE] = core::array::from_fn(|_| Device::new());
    partition(&mut devices);

    assert!(api::is_connectable(&devices[0], 2));
    assert!(!api::is_connectable(&devices[0], 4));
    assert!(!api::is_connectable(&devices[5], 1));
    assert!(api::is_connectable(&devices[5], 3));

    for device in &mut devices {
        api::clear(device);
    }
    assert!(
        devices
            .iter()
            .all(|device| (0..NETWORK_SIZE as u16).all(|id| api::is_connectable(device, id)))
    );
}

//! Property-based tests for the buffer-count configuration contract.

use proptest::prelude::*;

use gencam::config::{GencamConfig, SharedConfig, MAX_BUFFER_COUNT, MIN_BUFFER_COUNT};
use gencam::errors::CameraError;
use gencam::node::CameraNode;
use gencam::testing::SyntheticCamera;

proptest! {
    /// Every value inside [3,1000] is accepted, everything outside rejected,
    /// and a rejected update never clobbers the stored value.
    #[test]
    fn buffer_count_validation_matches_the_documented_range(count in 0usize..2000) {
        let shared = SharedConfig::new(GencamConfig::default()).unwrap();
        let before = shared.buffer_count();
        let result = shared.set_buffer_count(count);

        if (MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT).contains(&count) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(shared.buffer_count(), count);
        } else {
            prop_assert_eq!(result, Err(CameraError::InvalidBufferCount(count)));
            prop_assert_eq!(shared.buffer_count(), before);
        }
    }

    /// Config-level validation agrees with the store-level check.
    #[test]
    fn config_validate_agrees_with_shared_config(count in 0usize..2000) {
        let config = GencamConfig::new("prop-cam").with_buffer_count(count);
        let valid = (MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT).contains(&count);
        prop_assert_eq!(config.validate().is_ok(), valid);
        prop_assert_eq!(SharedConfig::new(config).is_ok(), valid);
    }
}

proptest! {
    // Starting a real session per case is comparatively heavy; a handful of
    // sampled counts is enough on top of the exhaustive validation above.
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// A session started with an in-range count allocates exactly that many
    /// buffers.
    #[test]
    fn start_allocates_exactly_the_configured_buffers(
        count in MIN_BUFFER_COUNT..=MAX_BUFFER_COUNT,
    ) {
        let camera = SyntheticCamera::new("prop-cam");
        let config = GencamConfig::new("prop-cam").with_buffer_count(count);
        let node = CameraNode::open(config, camera.clone()).unwrap();

        node.stream_start().unwrap();
        prop_assert_eq!(camera.streaming_buffer_count(), Some(count));
        node.stream_stop();
        prop_assert_eq!(camera.streaming_buffer_count(), None);
    }
}

// ABOUTME: Integration tests for status tables, built-in providers, and the registry.
// ABOUTME: Property tests check that normalization is total for arbitrary input.

use cloudimage::compute::Status;
use cloudimage::normalize::*;
use cloudimage::types::ProviderName;
use proptest::prelude::*;

const MAPPED: [Status; 4] = [
    Status::Pending,
    Status::Available,
    Status::Deleted,
    Status::Error,
];

fn provider(name: &str) -> ProviderName {
    ProviderName::new(name).unwrap()
}

fn vendor_table() -> StatusTable {
    StatusTable::builder()
        .text("ACTIVE", Status::Available)
        .text("BUILD", Status::Pending)
        .build()
        .unwrap()
}

mod totality {
    use super::*;

    proptest! {
        #[test]
        fn unknown_text_is_unrecognized(raw in "\\PC*") {
            let table = vendor_table();
            let key = raw.to_ascii_lowercase();
            prop_assume!(key != "active" && key != "build");
            prop_assert_eq!(table.to_canonical(raw.as_str()), Status::Unrecognized);
        }

        #[test]
        fn unknown_codes_are_unrecognized(code in any::<i64>()) {
            let table = providers::vcloud();
            prop_assume!(![-1, 0, 1, 8].contains(&code));
            prop_assert_eq!(table.to_canonical(&code), Status::Unrecognized);
        }

        #[test]
        fn builtin_tables_never_panic(raw in "\\PC*", code in any::<i64>()) {
            for (_, table) in providers::all() {
                let text = table.to_canonical(raw.as_str());
                let coded = table.to_canonical(&code);
                prop_assert!(Status::ALL.contains(&text));
                prop_assert!(Status::ALL.contains(&coded));
            }
        }

        #[test]
        fn unknown_provider_is_unrecognized(raw in "[a-z_]{1,16}") {
            let registry = StatusRegistry::builtin();
            prop_assert_eq!(
                registry.normalize(&provider("no-such-cloud"), raw.as_str()),
                Status::Unrecognized
            );
        }

        #[test]
        fn prefix_table_is_total(raw in "\\PC*") {
            let table = StatusTable::builder()
                .match_mode(MatchMode::Prefix)
                .text("build", Status::Pending)
                .build()
                .unwrap();
            let expected = if raw.to_ascii_lowercase().starts_with("build") {
                Status::Pending
            } else {
                Status::Unrecognized
            };
            prop_assert_eq!(table.to_canonical(raw.as_str()), expected);
        }
    }
}

mod table_entries {
    use super::*;

    #[test]
    fn every_entry_of_every_builtin_maps_into_known_states() {
        for (name, table) in providers::all() {
            for (native, status) in table.entries() {
                assert!(MAPPED.contains(&status), "{name}: {native} -> {status}");
                assert_eq!(table.to_canonical(&native), status, "{name}: {native}");
            }
        }
    }

    #[test]
    fn entries_list_text_before_codes() {
        let table = StatusTable::builder()
            .code(3, Status::Error)
            .text("ok", Status::Available)
            .build()
            .unwrap();
        assert_eq!(
            table.entries(),
            vec![
                (NativeStatus::Text("ok".to_string()), Status::Available),
                (NativeStatus::Code(3), Status::Error),
            ]
        );
    }

    #[test]
    fn several_native_codes_share_one_canonical_state() {
        let table = providers::aws_ec2();
        assert_eq!(table.to_canonical("pending"), Status::Pending);
        assert_eq!(table.to_canonical("transient"), Status::Pending);
        assert_eq!(table.to_canonical("invalid"), Status::Error);
        assert_eq!(table.to_canonical("failed"), Status::Error);
    }
}

mod builtin_providers {
    use super::*;

    #[test]
    fn aws_ec2() {
        let registry = StatusRegistry::builtin();
        let ec2 = provider(providers::AWS_EC2);
        assert_eq!(registry.normalize(&ec2, "available"), Status::Available);
        assert_eq!(registry.normalize(&ec2, "AVAILABLE"), Status::Available);
        assert_eq!(registry.normalize(&ec2, "deregistered"), Status::Deleted);
        assert_eq!(registry.normalize(&ec2, "disabled"), Status::Unrecognized);
    }

    #[test]
    fn openstack_glance() {
        let registry = StatusRegistry::builtin();
        let glance = provider(providers::OPENSTACK_GLANCE);
        assert_eq!(registry.normalize(&glance, "active"), Status::Available);
        assert_eq!(registry.normalize(&glance, "pending_delete"), Status::Deleted);
        assert_eq!(registry.normalize(&glance, "killed"), Status::Error);
    }

    #[test]
    fn openstack_nova() {
        let registry = StatusRegistry::builtin();
        let nova = provider(providers::OPENSTACK_NOVA);
        assert_eq!(registry.normalize(&nova, "ACTIVE"), Status::Available);
        assert_eq!(registry.normalize(&nova, "SAVING"), Status::Pending);
        assert_eq!(registry.normalize(&nova, "UNKNOWN"), Status::Unrecognized);
    }

    #[test]
    fn azure_and_triton() {
        let registry = StatusRegistry::builtin();
        assert_eq!(
            registry.normalize(&provider(providers::AZURE), "succeeded"),
            Status::Available
        );
        assert_eq!(
            registry.normalize(&provider(providers::TRITON), "unactivated"),
            Status::Pending
        );
    }

    #[test]
    fn vcloud_codes_through_native_status() {
        let registry = StatusRegistry::builtin();
        let vcloud = provider(providers::VCLOUD);
        assert_eq!(
            registry.normalize(&vcloud, &NativeStatus::Code(-1)),
            Status::Error
        );
        assert_eq!(
            registry.normalize(&vcloud, &NativeStatus::infer("8")),
            Status::Available
        );
        assert_eq!(
            registry.normalize(&vcloud, &NativeStatus::Code(6)),
            Status::Unrecognized
        );
    }

    #[test]
    fn transitional_native_states_are_pending() {
        let cases = [
            (providers::AWS_EC2, "pending"),
            (providers::OPENSTACK_GLANCE, "saving"),
            (providers::GCE, "PENDING"),
            (providers::AZURE, "Updating"),
            (providers::TRITON, "creating"),
        ];
        let registry = StatusRegistry::builtin();
        for (name, raw) in cases {
            let status = registry.normalize(&provider(name), raw);
            assert!(status.is_transitional(), "{name}: {raw} -> {status}");
        }
    }
}

mod native_status {
    use super::*;

    #[test]
    fn deserializes_codes_and_text() {
        let code: NativeStatus = serde_json::from_str("8").unwrap();
        let text: NativeStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(code, NativeStatus::Code(8));
        assert_eq!(text, NativeStatus::Text("active".to_string()));
    }

    #[test]
    fn missing_native_status_is_unrecognized() {
        let table = vendor_table();
        assert_eq!(
            table.to_canonical_opt(None::<&NativeStatus>),
            Status::Unrecognized
        );
    }
}

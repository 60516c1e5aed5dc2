// ABOUTME: Integration tests for type-safe identifiers and validated provider names.
// ABOUTME: Tests parsing, validation, and serde behavior of the shared types.

use cloudimage::types::*;
use std::collections::HashSet;

mod provider_name_tests {
    use super::*;

    #[test]
    fn valid_dns_name() {
        let name = ProviderName::new("openstack-glance").unwrap();
        assert_eq!(name.as_str(), "openstack-glance");
        assert_eq!(name.to_string(), "openstack-glance");
    }

    #[test]
    fn empty_returns_error() {
        assert_eq!(ProviderName::new(""), Err(ProviderNameError::Empty));
    }

    #[test]
    fn too_long_returns_error() {
        let long_name = "a".repeat(64);
        assert_eq!(
            ProviderName::new(&long_name),
            Err(ProviderNameError::TooLong)
        );
    }

    #[test]
    fn valid_63_chars() {
        let name = "a".repeat(63);
        assert!(ProviderName::new(&name).is_ok());
    }

    #[test]
    fn hyphens_only_in_the_middle() {
        assert_eq!(
            ProviderName::new("-gce"),
            Err(ProviderNameError::StartsWithHyphen)
        );
        assert_eq!(
            ProviderName::new("gce-"),
            Err(ProviderNameError::EndsWithHyphen)
        );
    }

    #[test]
    fn uppercase_returns_error() {
        assert_eq!(
            ProviderName::new("AWS-EC2"),
            Err(ProviderNameError::NotLowercase)
        );
    }

    #[test]
    fn underscore_is_invalid() {
        assert_eq!(
            ProviderName::new("aws_ec2"),
            Err(ProviderNameError::InvalidChar('_'))
        );
    }

    #[test]
    fn parses_from_str() {
        let name: ProviderName = "azure".parse().unwrap();
        assert_eq!(name.as_str(), "azure");
        assert!("Azure".parse::<ProviderName>().is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: ProviderName = serde_yaml::from_str("triton").unwrap();
        assert_eq!(ok.as_str(), "triton");
        assert!(serde_yaml::from_str::<ProviderName>("Not Valid").is_err());
    }

    #[test]
    fn orders_alphabetically() {
        let mut names = vec![
            ProviderName::new("vcloud").unwrap(),
            ProviderName::new("aws-ec2").unwrap(),
            ProviderName::new("gce").unwrap(),
        ];
        names.sort();
        let sorted: Vec<_> = names.iter().map(ProviderName::as_str).collect();
        assert_eq!(sorted, ["aws-ec2", "gce", "vcloud"]);
    }
}

mod id_tests {
    use super::*;

    #[test]
    fn image_id_stores_value() {
        let id = ImageId::new("ami-0abc1234");
        assert_eq!(id.as_str(), "ami-0abc1234");
        assert_eq!(id.to_string(), "ami-0abc1234");
    }

    #[test]
    fn location_id_stores_value() {
        let id = LocationId::new("us-east-1a");
        assert_eq!(id.into_inner(), "us-east-1a");
    }

    #[test]
    fn equal_values_hash_together() {
        let ids: HashSet<ImageId> = ["img-1", "img-1", "img-2"]
            .into_iter()
            .map(ImageId::new)
            .collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ImageId::new("img-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"img-7\"");
        let back: ImageId = serde_json::from_str("\"img-7\"").unwrap();
        assert_eq!(back, id);
    }
}

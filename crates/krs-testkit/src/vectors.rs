//! Known-answer vectors for the permission codec and description parser.
//!
//! The texts are what `keyctl describe` prints for the masks, so the same
//! vectors check the codec offline and the oracle against a live kernel.

use serde::Serialize;

use krs_core::{Description, KeyPermissions, KeyType};

/// A permission mask and its textual form.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionVector {
    pub name: &'static str,
    pub mask: u32,
    pub text: &'static str,
}

/// A raw kernel description and the fields it parses into.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptionVector {
    pub name: &'static str,
    pub raw: &'static str,
    pub key_type: &'static str,
    pub uid: u32,
    pub gid: u32,
    pub mask: u32,
    pub description: &'static str,
}

pub fn permission_vectors() -> Vec<PermissionVector> {
    vec![
        PermissionVector {
            name: "empty",
            mask: 0,
            text: "------------------------",
        },
        PermissionVector {
            name: "default user key",
            mask: 0x3f01_0000,
            text: "alswrv-----v------------",
        },
        PermissionVector {
            name: "default user keyring",
            mask: 0x3f3f_0000,
            text: "alswrvalswrv------------",
        },
        PermissionVector {
            name: "mixed lanes",
            mask: 0x3f21_1705,
            text: "alswrva----v-l-wrv---w-v",
        },
        PermissionVector {
            name: "everything",
            mask: 0x3f3f_3f3f,
            text: "alswrvalswrvalswrvalswrv",
        },
        PermissionVector {
            name: "session keyring",
            mask: 0x3f13_0000,
            text: "alswrv-l--rv------------",
        },
        PermissionVector {
            name: "view only",
            mask: 0x0101_0101,
            text: "-----v-----v-----v-----v",
        },
        PermissionVector {
            name: "search and read",
            mask: 0x1b0b_0b0b,
            text: "-ls-rv--s-rv--s-rv--s-rv",
        },
    ]
}

pub fn description_vectors() -> Vec<DescriptionVector> {
    vec![
        DescriptionVector {
            name: "user key",
            raw: "user;1000;1000;3f010000;api-token",
            key_type: "user",
            uid: 1000,
            gid: 1000,
            mask: 0x3f01_0000,
            description: "api-token",
        },
        DescriptionVector {
            name: "session keyring",
            raw: "keyring;0;0;3f130000;_ses",
            key_type: "keyring",
            uid: 0,
            gid: 0,
            mask: 0x3f13_0000,
            description: "_ses",
        },
        DescriptionVector {
            name: "separator in description",
            raw: "user;42;7;3f211705;svc;prod;db",
            key_type: "user",
            uid: 42,
            gid: 7,
            mask: 0x3f21_1705,
            description: "svc;prod;db",
        },
        DescriptionVector {
            name: "empty description",
            raw: "keyring;1;1;00000000;",
            key_type: "keyring",
            uid: 1,
            gid: 1,
            mask: 0,
            description: "",
        },
    ]
}

/// Check one permission vector against the codec.
pub fn check_permission_vector(vector: &PermissionVector) -> anyhow::Result<()> {
    let mask = KeyPermissions::new(vector.mask)?;
    anyhow::ensure!(
        mask.encode() == vector.text,
        "{}: encoded {:?}, expected {:?}",
        vector.name,
        mask.encode(),
        vector.text
    );
    let decoded = KeyPermissions::decode(vector.text)?;
    anyhow::ensure!(
        decoded == mask,
        "{}: decoded {decoded:?}, expected {mask:?}",
        vector.name
    );
    Ok(())
}

/// Check one description vector against the parser.
pub fn check_description_vector(vector: &DescriptionVector) -> anyhow::Result<()> {
    let parsed: Description = vector.raw.parse()?;
    let expected = Description {
        key_type: vector.key_type.parse::<KeyType>()?,
        uid: vector.uid,
        gid: vector.gid,
        permissions: KeyPermissions::new(vector.mask)?,
        name: vector.description.to_string(),
    };
    anyhow::ensure!(parsed == expected, "{}: parsed {parsed:?}", vector.name);
    Ok(())
}

/// All vectors as one JSON document.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "permissions": permission_vectors(),
        "descriptions": description_vectors(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_vectors() {
        for vector in permission_vectors() {
            check_permission_vector(&vector).unwrap();
        }
    }

    #[test]
    fn test_description_vectors() {
        for vector in description_vectors() {
            check_description_vector(&vector).unwrap();
        }
    }

    #[test]
    fn test_wrong_vector_is_reported() {
        let vector = PermissionVector {
            name: "wrong",
            mask: 0x3f01_0000,
            text: "alswrvalswrv------------",
        };
        let err = check_permission_vector(&vector).unwrap_err();
        assert!(err.to_string().contains("wrong"));
    }

    #[test]
    fn test_vectors_json() {
        let json = vectors_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["permissions"].as_array().unwrap().len(),
            permission_vectors().len()
        );
        assert_eq!(value["descriptions"][2]["description"], "svc;prod;db");
    }
}

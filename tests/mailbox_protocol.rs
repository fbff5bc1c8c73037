//! End-to-end protocol tests: registration against a shared naming service,
//! key exchange between two registered mailboxes, and durability across a
//! registry restart.

use mailbox_registry::adapters::{
    FileBackedKVStore, InMemoryKVStore, InMemoryNamingService, Secp256k1IdentityGenerator,
};
use mailbox_registry::{
    MailboxError, MailboxRegistryApi, MailboxService, NamingConfig, NamingService, RegistryConfig,
};

fn registry(
    naming: InMemoryNamingService,
) -> MailboxService<InMemoryNamingService, Secp256k1IdentityGenerator, InMemoryKVStore> {
    MailboxService::new(naming, Secp256k1IdentityGenerator::new(), InMemoryKVStore::new()).unwrap()
}

#[tokio::test]
async fn two_parties_derive_the_same_secret() {
    // Alice and Bob run separate registry instances against one naming
    // service, as two local processes would.
    let naming = InMemoryNamingService::default();
    let alice = registry(naming.clone());
    let bob = registry(naming.clone());

    let alice_box = alice.create_mailbox("alice-box", "alice-pw").await.unwrap();
    let bob_box = bob.create_mailbox("bob-corner", "bob-pw").await.unwrap();

    let alice_secret = alice
        .derive_shared_secret(
            alice_box.identity.private_key().unwrap().expose(),
            "bob-corner",
        )
        .await
        .unwrap();
    let bob_secret = bob
        .derive_shared_secret(bob_box.identity.private_key().unwrap().expose(), "alice-box")
        .await
        .unwrap();

    assert_eq!(alice_secret.to_hex(), bob_secret.to_hex());
    assert_eq!(alice_secret.to_hex().len(), 64);
}

#[tokio::test]
async fn second_instance_sees_the_name_as_taken() {
    let naming = InMemoryNamingService::default();
    let first = registry(naming.clone());
    let second = registry(naming.clone());

    first.create_mailbox("shared-name1", "pw").await.unwrap();
    let result = second.create_mailbox("shared-name1", "pw").await;

    assert_eq!(
        result.unwrap_err(),
        MailboxError::NameUnavailable {
            name: "shared-name1".to_string()
        }
    );
    assert_eq!(naming.bound_count(), 1);
}

#[tokio::test]
async fn registry_restart_keeps_public_records_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig {
        naming: NamingConfig::default(),
        storage: mailbox_registry::StorageConfig {
            data_path: dir.path().join("mailboxes.json"),
        },
    };
    config.validate().unwrap();
    let naming = InMemoryNamingService::new(config.naming.clone());

    {
        let store = FileBackedKVStore::new(&config.storage.data_path).unwrap();
        let service =
            MailboxService::new(naming.clone(), Secp256k1IdentityGenerator::new(), store).unwrap();
        let created = service.create_mailbox("durable-box", "pw").await.unwrap();
        assert!(created.identity.private_key().is_some());
    }

    // Reopen the store: the record survives, the private key does not.
    let store = FileBackedKVStore::new(&config.storage.data_path).unwrap();
    let service = MailboxService::new(naming, Secp256k1IdentityGenerator::new(), store).unwrap();

    let reloaded = service.mailbox("durable-box").unwrap().unwrap();
    assert!(reloaded.identity.private_key().is_none());
    assert!(!reloaded.identity.public_key.is_empty());
    assert!(!reloaded.identity.address.is_empty());
}

#[tokio::test]
async fn resolved_binding_matches_the_created_identity() {
    let naming = InMemoryNamingService::default();
    let service = registry(naming.clone());

    let mailbox = service.create_mailbox("lookup-me1", "pw").await.unwrap();

    assert_eq!(
        naming.public_key("lookup-me1").await.unwrap(),
        mailbox.identity.public_key
    );
    assert_eq!(
        naming.address("lookup-me1").as_deref(),
        Some(mailbox.identity.address.as_str())
    );
}

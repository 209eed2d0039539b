#![cfg(test)]

use super::*;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use soroban_sdk::{Bytes, BytesN, Env};

fn create_client(env: &Env) -> SignatureRecoveryContractClient<'_> {
    let contract_id = env.register(SignatureRecoveryContract, ());
    SignatureRecoveryContractClient::new(env, &contract_id)
}

fn test_key(seed: u8) -> SecretKey {
    SecretKey::from_slice(&[seed; 32]).unwrap()
}

fn public_key(env: &Env, key: &SecretKey) -> BytesN<65> {
    let secp = Secp256k1::signing_only();
    BytesN::from_array(env, &PublicKey::from_secret_key(&secp, key).serialize_uncompressed())
}

fn sign_raw(digest: &[u8; 32], key: &SecretKey) -> [u8; 65] {
    let secp = Secp256k1::signing_only();
    let message = Message::from_digest_slice(digest).unwrap();
    let (recovery_id, compact) = secp
        .sign_ecdsa_recoverable(&message, key)
        .serialize_compact();

    let mut raw = [0u8; 65];
    raw[..64].copy_from_slice(&compact);
    raw[64] = recovery_id.to_i32() as u8;
    raw
}

// n - s over big-endian bytes.
fn negate_scalar(s: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let mut diff = CURVE_ORDER[i] as i16 - s[i] as i16 - borrow;
        borrow = 0;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        }
        out[i] = diff as u8;
    }
    out
}

#[test]
fn test_recover_identity() {
    let env = Env::default();
    let client = create_client(&env);

    let key = test_key(1);
    let digest = [7u8; 32];
    let signature = BytesN::from_array(&env, &sign_raw(&digest, &key));

    let identity = client.recover(&BytesN::from_array(&env, &digest), &signature);

    assert_eq!(identity, client.identity_of(&public_key(&env, &key)));
}

#[test]
fn test_recover_public_key() {
    let env = Env::default();
    let client = create_client(&env);

    let key = test_key(2);
    let digest = [9u8; 32];
    let signature = BytesN::from_array(&env, &sign_raw(&digest, &key));

    let recovered = client.recover_public_key(&BytesN::from_array(&env, &digest), &signature);
    assert_eq!(recovered, public_key(&env, &key));
}

#[test]
fn test_identity_is_sha256_of_uncompressed_key() {
    let env = Env::default();
    let client = create_client(&env);

    let key = public_key(&env, &test_key(3));
    let encoded: Bytes = key.clone().into();
    let expected = env.crypto().sha256(&encoded).to_bytes();

    assert_eq!(client.identity_of(&key), expected);
    assert_eq!(signer_identity(&env, &key), expected);
}

#[test]
fn test_legacy_recovery_id_accepted() {
    let env = Env::default();
    let client = create_client(&env);

    let key = test_key(4);
    let digest = [1u8; 32];
    let mut raw = sign_raw(&digest, &key);
    raw[64] += 27;

    let identity = client.recover(
        &BytesN::from_array(&env, &digest),
        &BytesN::from_array(&env, &raw),
    );
    assert_eq!(identity, client.identity_of(&public_key(&env, &key)));
}

#[test]
fn test_other_digest_recovers_other_identity() {
    let env = Env::default();
    let client = create_client(&env);

    let key = test_key(5);
    let signature = BytesN::from_array(&env, &sign_raw(&[3u8; 32], &key));

    let identity = client.recover(&BytesN::from_array(&env, &[4u8; 32]), &signature);
    assert_ne!(identity, client.identity_of(&public_key(&env, &key)));
}

#[test]
fn test_zero_signature_rejected() {
    let env = Env::default();
    let client = create_client(&env);

    let result = client.try_recover(
        &BytesN::from_array(&env, &[5u8; 32]),
        &BytesN::from_array(&env, &[0u8; 65]),
    );
    assert_eq!(result, Err(Ok(RecoveryError::InvalidScalar)));
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_invalid_recovery_id() {
    let env = Env::default();
    let client = create_client(&env);

    let digest = [6u8; 32];
    let mut raw = sign_raw(&digest, &test_key(6));
    raw[64] = 4;

    client.recover(&BytesN::from_array(&env, &digest), &BytesN::from_array(&env, &raw));
}

#[test]
fn test_r_at_curve_order_rejected() {
    let env = Env::default();
    let client = create_client(&env);

    let digest = [8u8; 32];
    let mut raw = sign_raw(&digest, &test_key(7));
    raw[..32].copy_from_slice(&CURVE_ORDER);

    let result = client.try_recover(
        &BytesN::from_array(&env, &digest),
        &BytesN::from_array(&env, &raw),
    );
    assert_eq!(result, Err(Ok(RecoveryError::InvalidScalar)));
}

#[test]
fn test_high_s_rejected() {
    let env = Env::default();
    let client = create_client(&env);

    let digest = [2u8; 32];
    let mut raw = sign_raw(&digest, &test_key(8));
    let high_s = negate_scalar(&raw[32..64]);
    raw[32..64].copy_from_slice(&high_s);
    raw[64] ^= 1;

    let result = client.try_recover(
        &BytesN::from_array(&env, &digest),
        &BytesN::from_array(&env, &raw),
    );
    assert_eq!(result, Err(Ok(RecoveryError::HighS)));
}

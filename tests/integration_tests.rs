//! Integration tests for embed/extract end-to-end functionality.

use lsb_stego::config::{Addressing, StegoConfig};
use lsb_stego::encoding::{self, MessageBits};
use lsb_stego::stego::{self, load_keys, save_keys, ReverseRaster};
use lsb_stego::{image_io, Error, PixelContainer, Recovery, Steganographer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// Helper to build a noisy cover so LSB changes are visible.
fn random_cover(height: usize, width: usize, seed: u64) -> PixelContainer {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..height * width * 3).map(|_| rng.gen()).collect();
    PixelContainer::from_raw(height, width, data).expect("valid dimensions")
}

#[test]
fn test_scenario_a_capacity_and_length_replay() {
    let mut container = PixelContainer::filled(2, 2, 0);
    assert_eq!(container.capacity_bits(), 12);

    let too_long: MessageBits = "1011001110101010".parse().unwrap();
    let err = stego::embed(&mut container, &too_long, Addressing::Contiguous).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { .. }));
    assert_eq!(container, PixelContainer::filled(2, 2, 0));

    let bits: MessageBits = "101100111010".parse().unwrap();
    let embedding = stego::embed(&mut container, &bits, Addressing::Contiguous).unwrap();
    assert_eq!(embedding.occupancy, 12);

    let recovered = stego::extract(&container, &Recovery::Length(12)).unwrap();
    assert_eq!(recovered.to_string(), "101100111010");
}

#[test]
fn test_scenario_b_key_file_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let key_path = temp_dir.path().join("keys.txt");

    let mut container = PixelContainer::filled(3, 3, 100);
    assert_eq!(container.capacity_bits(), 27);

    let stego = Steganographer::new(StegoConfig::new(Addressing::KeyList)).unwrap();
    let embedding = stego.embed_message(&mut container, "A").unwrap();
    let keys = embedding.keys.expect("key-list addressing records keys");
    assert_eq!(keys.len(), 8);

    save_keys(&key_path, &keys).expect("Failed to save keys");
    let contents = std::fs::read_to_string(&key_path).unwrap();
    assert_eq!(contents.lines().count(), 8);
    assert_eq!(contents.lines().next(), Some("2 2 0"));

    let reloaded = load_keys(&key_path).expect("Failed to load keys");
    let message = stego
        .extract_message(&container, &Recovery::Keys(reloaded))
        .unwrap();
    assert_eq!(message, "A");
}

#[test]
fn test_png_roundtrip_both_modes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let cover_path = temp_dir.path().join("cover.png");
    let stego_path = temp_dir.path().join("stego.png");

    let cover = random_cover(32, 24, 7);
    image_io::save_container(&cover, &cover_path).unwrap();

    let message = "Ваше сообщение: the quick brown fox 🦊".as_bytes();

    for addressing in [Addressing::Contiguous, Addressing::KeyList] {
        let stego = Steganographer::new(StegoConfig::new(addressing)).unwrap();
        let embedding = stego
            .embed_file(&cover_path, &stego_path, message)
            .expect("Failed to embed");
        assert_eq!(embedding.occupancy, message.len() * 8);

        let recovered = stego
            .extract_file(&stego_path, &embedding.recovery())
            .expect("Failed to extract");
        assert_eq!(recovered, message);
    }
}

#[test]
fn test_recovery_modes_are_equivalent() {
    let mut container = random_cover(10, 10, 42);
    let bits = encoding::encode(b"equivalence");

    let embedding = stego::embed(&mut container, &bits, Addressing::KeyList).unwrap();
    let keys = embedding.keys.clone().unwrap();

    let by_length = stego::extract(&container, &Recovery::Length(embedding.occupancy)).unwrap();
    let by_keys = stego::extract(&container, &Recovery::Keys(keys)).unwrap();
    assert_eq!(by_length, by_keys);
    assert_eq!(encoding::decode(&by_keys).unwrap(), b"equivalence");
}

#[test]
fn test_random_messages_lsb_only_and_tail_preserved() {
    let mut rng = StdRng::seed_from_u64(1234);

    for round in 0..20 {
        let height = rng.gen_range(1..12);
        let width = rng.gen_range(1..12);
        let cover = random_cover(height, width, round);
        let max_bytes = height * width * 3 / 8;
        let len = rng.gen_range(0..=max_bytes);
        let message: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let mut container = cover.clone();
        let stego = Steganographer::default();
        let embedding = stego.embed_bytes(&mut container, &message).unwrap();

        for (c, s) in cover.as_raw().iter().zip(container.as_raw()) {
            assert!(c ^ s <= 1);
        }
        for key in ReverseRaster::new(height, width).skip(embedding.occupancy) {
            assert_eq!(
                container.get(key.row, key.column, key.channel),
                cover.get(key.row, key.column, key.channel)
            );
        }

        let recovered = stego
            .extract_bytes(&container, &embedding.recovery())
            .unwrap();
        assert_eq!(recovered, message);
    }
}

#[test]
fn test_capacity_boundary() {
    let cover = random_cover(4, 2, 9);

    let mut exact = cover.clone();
    let full: MessageBits = (0..24).map(|i| i % 3 == 1).collect();
    let embedding = stego::embed(&mut exact, &full, Addressing::Contiguous).unwrap();
    assert_eq!(embedding.occupancy, 24);
    // Every slot now carries its payload bit.
    for (step, key) in ReverseRaster::new(4, 2).enumerate() {
        let lsb = exact.get(key.row, key.column, key.channel) & 1;
        assert_eq!(lsb, (step % 3 == 1) as u8);
    }

    let mut over = cover.clone();
    let too_many: MessageBits = (0..25).map(|_| true).collect();
    let err = stego::embed(&mut over, &too_many, Addressing::Contiguous).unwrap_err();
    assert!(matches!(
        err,
        Error::CapacityExceeded {
            needed: 25,
            available: 24
        }
    ));
    assert_eq!(over, cover);
}

#[test]
fn test_out_of_range_key_file() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = temp_dir.path().join("keys.txt");
    std::fs::write(&key_path, "0 0 0\n5 0 1\n").unwrap();

    let keys = load_keys(&key_path).unwrap();
    let container = PixelContainer::filled(2, 2, 0);
    let err = stego::extract(&container, &Recovery::Keys(keys)).unwrap_err();

    assert!(matches!(err, Error::AddressOutOfRange { .. }));
}

#[test]
fn test_malformed_key_file() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = temp_dir.path().join("keys.txt");
    std::fs::write(&key_path, "0 0 0\n0 0\n").unwrap();

    let err = load_keys(&key_path).unwrap_err();
    assert!(matches!(err, Error::MalformedKeyFile { line: 2, .. }));
}

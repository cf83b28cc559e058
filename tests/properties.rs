use cryptal_sha::hash::sha256::{H224_INIT, compress_blocks as compress256};
use cryptal_sha::hash::sha512::{H384_INIT, compress_blocks as compress512};
use cryptal_sha::hash::padding::pad;
use cryptal_sha::hash::{Algorithm, Backend, HashContext};
use proptest::prelude::*;

fn chunked_digest(algorithm: Algorithm, chunks: &[&[u8]]) -> Vec<u8> {
    let mut ctx = HashContext::new(algorithm);
    for chunk in chunks {
        ctx.update(chunk).unwrap();
    }
    ctx.finalize().unwrap().to_vec()
}

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn incrementality(
        algorithm in any_algorithm(),
        a in prop::collection::vec(any::<u8>(), 0..300),
        b in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let joined = [a.as_slice(), b.as_slice()].concat();

        prop_assert_eq!(
            chunked_digest(algorithm, &[a.as_slice(), b.as_slice()]),
            chunked_digest(algorithm, &[joined.as_slice()])
        );
    }

    #[test]
    fn arbitrary_chunking_of_whole_blocks(
        algorithm in any_algorithm(),
        blocks in 1usize..5,
        chunk in 1usize..200,
        seed in any::<u8>(),
    ) {
        let len = blocks * algorithm.block_size();
        let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(seed)).collect();
        let pieces: Vec<&[u8]> = data.chunks(chunk).collect();

        prop_assert_eq!(
            chunked_digest(algorithm, &pieces),
            algorithm.digest(&data).to_vec()
        );
    }

    #[test]
    fn sha224_truncation(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let block_len = data.len() - data.len() % 64;
        let padding = pad::<64>(&data[block_len..], (data.len() as u128) * 8, 8);

        let mut state = H224_INIT;
        compress256(Backend::Portable, &mut state, &data[..block_len]);
        for block in padding.blocks() {
            compress256(Backend::Portable, &mut state, block);
        }

        let serialized: Vec<u8> = state.iter().flat_map(|w| w.to_be_bytes()).collect();
        let digest = Algorithm::Sha224.digest(&data);
        prop_assert_eq!(&serialized[..28], digest.as_bytes());
    }

    #[test]
    fn sha384_truncation(data in prop::collection::vec(any::<u8>(), 0..400)) {
        let block_len = data.len() - data.len() % 128;
        let padding = pad::<128>(&data[block_len..], (data.len() as u128) * 8, 16);

        let mut state = H384_INIT;
        compress512(Backend::Unrolled, &mut state, &data[..block_len]);
        for block in padding.blocks() {
            compress512(Backend::Unrolled, &mut state, block);
        }

        let serialized: Vec<u8> = state.iter().flat_map(|w| w.to_be_bytes()).collect();
        let digest = Algorithm::Sha384.digest(&data);
        prop_assert_eq!(&serialized[..48], digest.as_bytes());
    }

    #[test]
    fn determinism(algorithm in any_algorithm(), data in prop::collection::vec(any::<u8>(), 0..500)) {
        prop_assert_eq!(algorithm.digest(&data), algorithm.digest(&data));
    }
}

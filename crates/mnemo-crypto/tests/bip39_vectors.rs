//! BIP-39 known test vectors, end to end.
//!
//! Test vectors sourced from:
//! - BIP-39: <https://github.com/trezor/python-mnemonic/blob/master/vectors.json>
//!
//! Every TREZOR vector uses the passphrase `"TREZOR"`. Vectors for the
//! other wordlists follow the same layout; the Japanese passphrase vector
//! comes from the Japanese BIP-39 test suite.

use mnemo_crypto::codec::{decode, encode, Entropy};
use mnemo_crypto::seed::mnemonic_to_seed;
use mnemo_crypto::validate::{is_valid, validate};
use mnemo_crypto::Bip39;
use mnemo_types::{Language, MnemoError};

// ===================================================================
// Vectors
// ===================================================================

/// (entropy hex, mnemonic, seed hex with passphrase "TREZOR")
const TREZOR_VECTORS: &[(&str, &str, &str)] = &[
    (
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
        "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607",
    ),
    (
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8",
    ),
    (
        "ffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069",
    ),
    (
        "000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        "035895f2f481b1b0f01fcf8c289c794660b289981a78f8106447707fdd9666ca06da5a9a565181599b79f53b844d8a71dd9f439c52a3d7b3e8a79c906ac845fa",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal will",
        "f2b94508732bcbacbcc020faefecfc89feafa6649a5491b8c952cede496c214a0c7b3c392d168748f2d4a612bada0753b52a1c7ac53c1e93abd5c6320b9e95dd",
    ),
    (
        "808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter always",
        "107d7c02a5aa6f38c58083ff74f04c607c2d2c0ecc55501dadd72d025b751bc27fe913ffb796f841c49b1d33b610cf0e91d3aa239027f5e99fe4ce9e5088cd65",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
        "0cd6e5d827bb62eb8fc1e262254223817fd068a74b5b449cc2f667c3f1f985a76379b43348d952e2265b4cd129090758b3e3c2c49103b5051aac2eaeb890a528",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
        "bc09fca1804f7e69da93c2f2028eb238c227f2e9dda30cd63699232578480a4021b146ad717fbb7e451ce9eb835f43620bf5c514db0f8add49f5d121449d3e87",
    ),
    (
        "8080808080808080808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
        "c0c519bd0e91a2ed54357d9d1ebef6f5af218a153624cf4f2da911a0ed8f7a09e2ef61af0aca007096df430022f7a2b6fb91661a9589097069720d015e4e982f",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        "dd48c104698c30cfe2b6142103248622fb7bb0ff692eebb00089b32d22484e1613912f0a5b694407be899ffd31ed3992c456cdf60f5d4564b8ba3f05a69890ad",
    ),
    (
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028",
    ),
    (
        "6610b25967cdcca9d59875f5cb50b0ea75433311869e930b",
        "gravity machine north sort system female filter attitude volume fold club stay feature office ecology stable narrow fog",
        "628c3827a8823298ee685db84f55caa34b5cc195a778e52d45f59bcf75aba68e4d7590e101dc414bc1bbd5737666fbbef35d1f1903953b66624f910feef245ac",
    ),
    (
        "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
        "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
        "64c87cde7e12ecf6704ab95bb1408bef047c22db4cc7491c4271d170a1b213d20b385bc1588d9c7b38f1b39d415665b8a9030c9ec653d75e65f847d8fc1fc440",
    ),
];

/// (entropy hex, mnemonic) for lengths the table above does not cover.
const MNEMONIC_VECTORS: &[(&str, &str)] = &[
    (
        "c0ba5a8e914111210f2bd131f3d5e08d",
        "scheme spot photo card baby mountain device kick cradle pact join borrow",
    ),
    (
        "f30f8c1da665478f49b001d94c5fc452",
        "vessel ladder alter error federal sibling chat ability sun glass valve picture",
    ),
    (
        "0460ef47585604c5660618db2e6a7e7f",
        "afford alter spike radar gate glance object seek swamp infant panel yellow",
    ),
    (
        "6d9be1ee6ebd27a258115aad99b7317b9c8d28b6d76431c3",
        "horn tenant knee talent sponsor spell gate clip pulse soap slush warm silver nephew swap uncle crack brave",
    ),
    (
        "9f6a2878b2520799a44ef18bc7df394e7061a224d2c33cd015b157d746869863",
        "panda eyebrow bullet gorilla call smoke muffin taste mesh discover soft ostrich alcohol speed nation flash devote level hobby quick inner drive ghost inside",
    ),
    (
        "066dca1a2bb7e8a1db2832148ce9933eea0f3ac9548d793112d9a95c9407efad",
        "all hour make first leader extend hole alien behind guard gospel lava path output census museum junior mass reopen famous sing advance salt reform",
    ),
];

/// Phrases for 0x00 and 0x7f entropy with their "TREZOR" seeds in the
/// remaining wordlists.
const OTHER_WORDLIST_VECTORS: &[(Language, &str, &str, &str)] = &[
    (
        Language::Italian,
        "00000000000000000000000000000000",
        "abaco abaco abaco abaco abaco abaco abaco abaco abaco abaco abaco abete",
        "d2ae4bbd4efc4aba345b66dc2bfa4ea280d85810945ba4e100707694d5731c5a\
         42ac0d0308ba9ad176966879328f1aa014fbcbeb46d671d9475c38254bf1eeb7",
    ),
    (
        Language::Italian,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "mimosa vita sussurro zinco vero saltare \
         zattera ulisse mimosa vita sussurro zircone",
        "f8c609647319a50116e9b7d1a0ec5535c6d08d6c958911fd2c8b2dfd55a61e63\
         e9c6c60c22b5c3aec725acb41980e63cb3ed75fb80648092dee1bbbeab476a6d",
    ),
    (
        Language::Portuguese,
        "00000000000000000000000000000000",
        "abacate abacate abacate abacate abacate abacate \
         abacate abacate abacate abacate abacate abater",
        "ab9742b024a1e8bd241b76f8b3a157e9d442da60277bc8f36b8b23afe163de79\
         414fb49fd1a8dd26f4ea7f0dc965c760b3b80727557bdca61e1f0b0f069952f2",
    ),
    (
        Language::Portuguese,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "imitador vinheta sogro xerife veleiro pomar \
         volumoso tratador imitador vinheta sogro xingar",
        "298d1614ff06ae803709f5be5331135cb74e6cc77fa09e07a3e887c2e370401f\
         9a73a409dadf58b5a5197b27ffb3fa5dd528aad9a1a8750d7669ce950ee60c2c",
    ),
    (
        Language::Czech,
        "00000000000000000000000000000000",
        "abdikace abdikace abdikace abdikace abdikace abdikace \
         abdikace abdikace abdikace abdikace abdikace agrese",
        "872501bed75c98fbf943a67907bf394995f337e9adfa23687282d1135c262421\
         715a0bcccfe2d3f5f8b72c8e2fa12a7a7267f8047b744557f4a9d49d11ccc75f",
    ),
    (
        Language::Czech,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "obrazec znak uznat zubovina zeman skupina \
         zrcadlo vzchopit obrazec znak uznat zubr",
        "68e1bd31ed5f20c9ab108c03b524e85209b0b27af80cb5d48fa71d03dbb528b7\
         3c2349bb8576f9b68825272984061594f520e54605a4898ba61c433d06bf5de7",
    ),
    (
        Language::Japanese,
        "00000000000000000000000000000000",
        "あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}\
         あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}あいこくしん\u{3000}あおぞら",
        "5a6c23b5abdd5c3e1f7d77ad25ecd715647bdafb44dab324c730a76a45d7421d\
         accee1a4ff0739715a2c56a8a9f1e527a5e3496224d91293bfcd9b5393bfff83",
    ),
    (
        Language::Japanese,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "そつう\u{3000}れきだい\u{3000}ほんやく\u{3000}わかす\u{3000}りくつ\u{3000}ばいか\u{3000}\
         ろせん\u{3000}やちん\u{3000}そつう\u{3000}れきだい\u{3000}ほんやく\u{3000}わかめ",
        "9d269b22155b3c915b09abfefd4e1104573c528f6977cde89c6a68152c3c714d\
         c6c7e0e62f221c322f3f76e4d0bcca66c06e3d2f6a8d70d612c87dd6dee63976",
    ),
    (
        Language::Korean,
        "00000000000000000000000000000000",
        "가격 가격 가격 가격 가격 가격 가격 가격 가격 가격 가격 가능",
        "a253d07f616223e337b6fa257632a2cc37e1ba36ff0bc7cf5a943366fa1b9ef0\
         2d6aa0333da51c17902951634b8aa81b6692a194b07f4f8c542335d73c96aad3",
    ),
    (
        Language::Korean,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "실장 활동 큰절 흔적 형제 제대로 훈련 한글 실장 활동 큰절 흔히",
        "e6995bf885f5c64932ca28bbb00bc100a6b89cb6edc987bb05f05f99ae7caf78\
         329029c189834c1cca938000bcf08423da011558a60cf3d90c9035eaaf241b9e",
    ),
    (
        Language::ChineseSimplified,
        "00000000000000000000000000000000",
        "的 的 的 的 的 的 的 的 的 的 的 在",
        "7f7c7f91ef81f0fb6a3b95b346c50e6472c1d554f8ba90637bad8afce4a4de87\
         c322c1acafa2f6f5e9a8f9b2d2c40e9d389efdc2adbe4445c21a0939fb39e91f",
    ),
    (
        Language::ChineseSimplified,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "枪 疫 霉 尝 俩 闹 饿 贤 枪 疫 霉 卿",
        "816a69d6866891b246b4d33f54d6d2be624470141754396205d039bdd8003949\
         fec4340253dde4c8e11437a181ad992f56d5b976eb9fbe48f4c5e5fec60a27e1",
    ),
    (
        Language::ChineseTraditional,
        "00000000000000000000000000000000",
        "的 的 的 的 的 的 的 的 的 的 的 在",
        "7f7c7f91ef81f0fb6a3b95b346c50e6472c1d554f8ba90637bad8afce4a4de87\
         c322c1acafa2f6f5e9a8f9b2d2c40e9d389efdc2adbe4445c21a0939fb39e91f",
    ),
    (
        Language::ChineseTraditional,
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "槍 疫 黴 嘗 倆 鬧 餓 賢 槍 疫 黴 卿",
        "f38af46f6bc3222b0f5aa14dd5b8b506e51131510f2450ec9fb52c28617cfa59\
         d436055fe542e25dfa01415639d2171e41796f169f8bbc18516941dfdee8fb72",
    ),
];

// ===================================================================
// Helper
// ===================================================================

fn entropy_from_hex(hex_str: &str) -> std::result::Result<Entropy, Box<dyn std::error::Error>> {
    let bytes = hex::decode(hex_str)?;
    Ok(Entropy::from_bytes(&bytes)?)
}

// ===================================================================
// Entropy -> mnemonic
// ===================================================================

#[test]
fn trezor_vectors_entropy_to_mnemonic() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for (entropy_hex, expected, _) in TREZOR_VECTORS {
        let entropy = entropy_from_hex(entropy_hex)?;
        let mnemonic = encode(&entropy, Language::English)?;
        assert_eq!(mnemonic.as_str(), *expected, "entropy {entropy_hex}");
    }
    Ok(())
}

#[test]
fn extra_vectors_entropy_to_mnemonic() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for (entropy_hex, expected) in MNEMONIC_VECTORS {
        let entropy = entropy_from_hex(entropy_hex)?;
        let mnemonic = encode(&entropy, Language::English)?;
        assert_eq!(mnemonic.as_str(), *expected, "entropy {entropy_hex}");
    }
    Ok(())
}

// ===================================================================
// Mnemonic -> entropy
// ===================================================================

#[test]
fn vectors_mnemonic_to_entropy() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let pairs = TREZOR_VECTORS
        .iter()
        .map(|(e, m, _)| (*e, *m))
        .chain(MNEMONIC_VECTORS.iter().copied());
    for (entropy_hex, phrase) in pairs {
        let entropy = decode(phrase, Language::English)?;
        assert_eq!(hex::encode(entropy.as_bytes()), entropy_hex, "{phrase}");
    }
    Ok(())
}

#[test]
fn vectors_validate() -> std::result::Result<(), MnemoError> {
    for (_, phrase, _) in TREZOR_VECTORS {
        validate(phrase, Language::English)?;
        assert!(is_valid(phrase, Language::English));
    }
    Ok(())
}

// ===================================================================
// Mnemonic -> seed
// ===================================================================

#[test]
fn trezor_vectors_seed() -> std::result::Result<(), MnemoError> {
    for (_, phrase, expected_seed) in TREZOR_VECTORS {
        let seed = mnemonic_to_seed(phrase, "TREZOR")?;
        assert_eq!(hex::encode(seed.as_bytes()), *expected_seed, "{phrase}");
    }
    Ok(())
}

#[test]
fn facade_matches_vectors() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let bip39 = Bip39::new(Language::English)?;
    let (entropy_hex, phrase, seed_hex) = TREZOR_VECTORS[1];
    let entropy = hex::decode(entropy_hex)?;

    let mnemonic = bip39.to_mnemonic(&entropy)?;
    assert_eq!(mnemonic.as_str(), phrase);
    assert!(bip39.check(phrase));
    assert_eq!(bip39.to_entropy(phrase)?.as_bytes(), entropy.as_slice());
    assert_eq!(hex::encode(mnemonic.to_seed("TREZOR")?.as_bytes()), seed_hex);
    Ok(())
}

// ===================================================================
// Non-English wordlists
// ===================================================================

/// Seeds for the zero-entropy phrases in the accented wordlists. The
/// password is the NFKD form of the phrase.
#[test]
fn accented_zero_entropy_seeds() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cases = [
        (
            Language::Spanish,
            "29a2ee16de47d07025de37e7d9c596869439f9bcd26a702d2bae64db2bf0f683\
             83841c5444b5b3bd39dd720d2ebe59969e110e5955c8e6d32c6c3294fd87439b",
        ),
        (
            Language::French,
            "3bf3366c40256d7e2fca716fddf8673425c7c7e444af290ee1edf1bbf095e6e7\
             8a7190253f3e46f1e2069345d4b05ac17b242faa225c0a3e4d268976744e0698",
        ),
    ];
    for (language, expected_seed) in cases {
        let mnemonic = Bip39::new(language)?.to_mnemonic(&[0u8; 16])?;
        let seed = mnemonic.to_seed("TREZOR")?;
        assert_eq!(hex::encode(seed.as_bytes()), expected_seed, "{language}");
    }
    Ok(())
}

#[test]
fn spanish_and_french_0x7f() -> std::result::Result<(), MnemoError> {
    let entropy = Entropy::from_bytes(&[0x7Fu8; 16])?;
    assert_eq!(
        encode(&entropy, Language::Spanish)?.as_str(),
        "ligero vista talar yogur venta queso yacer trozo ligero vista talar zafiro"
    );
    assert_eq!(
        encode(&entropy, Language::French)?.as_str(),
        "implorer visage sonnette voyage v\u{e9}loce pourpre volaille tribunal \
         implorer visage sonnette voyelle"
    );
    Ok(())
}

#[test]
fn other_wordlist_vectors() -> std::result::Result<(), Box<dyn std::error::Error>> {
    for (language, entropy_hex, phrase, seed_hex) in OTHER_WORDLIST_VECTORS {
        let entropy = entropy_from_hex(entropy_hex)?;
        let mnemonic = encode(&entropy, *language)?;
        assert_eq!(mnemonic.as_str(), *phrase, "{language}");
        assert_eq!(mnemonic.word_count(), 12, "{language}");

        let decoded = decode(phrase, *language)?;
        assert_eq!(hex::encode(decoded.as_bytes()), *entropy_hex, "{language}");

        let seed = mnemonic_to_seed(phrase, "TREZOR")?;
        assert_eq!(hex::encode(seed.as_bytes()), *seed_hex, "{language}");
    }
    Ok(())
}

/// Japanese passphrase holding a compatibility character (U+334D) and
/// precomposed voiced kana; only its NFKD form reaches the salt.
#[test]
fn japanese_passphrase_vector() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mnemonic = Bip39::new(Language::Japanese)?.to_mnemonic(&[0u8; 16])?;
    let passphrase = "\u{334d}\u{30ac}\u{30d0}\u{30f4}\u{30a1}\u{3071}\u{3070}\u{3050}\
                      \u{309e}\u{3061}\u{3062}\u{5341}\u{4eba}\u{5341}\u{8272}";
    let seed = mnemonic.to_seed(passphrase)?;
    assert_eq!(
        hex::encode(seed.as_bytes()),
        "a262d6fb6122ecf45be09c50492b31f92e9beb7d9a845987a02cefda57a15f9c\
         467a17872029a9e92299b5cbdf306e3a0ee620245cbd508959b6cb7ca637bd55"
    );
    Ok(())
}

//! Bech32 / Bech32m 与 segwit 见证程序编解码
//!
//! 普通 bech32 不限制 90 字符（Cardano 地址超长），segwit 地址按 BIP-173/BIP-350 校验

use bech32::primitives::decode::{CheckedHrpstring, UncheckedHrpstring};
use bech32::{Bech32, Bech32m, Fe32, Hrp};

use crate::error::AddressError;

/// 校验和变体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Bech32,
    Bech32m,
}

/// segwit 见证程序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessProgram {
    pub version: u8,
    pub program: Vec<u8>,
}

pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String, AddressError> {
    let hrp = parse_hrp(hrp)?;
    let encoded = match variant {
        Variant::Bech32 => bech32::encode::<Bech32>(hrp, data),
        Variant::Bech32m => bech32::encode::<Bech32m>(hrp, data),
    };
    encoded.map_err(|e| AddressError::format(format!("bech32 encode: {}", e)))
}

/// 解码 bech32 字符串并校验 hrp，返回 8 位数据
pub fn decode(s: &str, expected_hrp: &str, variant: Variant) -> Result<Vec<u8>, AddressError> {
    check_hrp(s, expected_hrp)?;

    let checked = match variant {
        Variant::Bech32 => CheckedHrpstring::new::<Bech32>(s),
        Variant::Bech32m => CheckedHrpstring::new::<Bech32m>(s),
    }
    .map_err(|_| AddressError::InvalidChecksum)?;

    Ok(checked.byte_iter().collect())
}

/// 同 [`decode`]，并要求数据长度固定
pub fn decode_exact(
    s: &str,
    expected_hrp: &str,
    variant: Variant,
    len: usize,
) -> Result<Vec<u8>, AddressError> {
    let data = decode(s, expected_hrp, variant)?;
    if data.len() != len {
        return Err(AddressError::InvalidLength {
            expected: len,
            found: data.len(),
        });
    }
    Ok(data)
}

pub fn encode_segwit(hrp: &str, version: u8, program: &[u8]) -> Result<String, AddressError> {
    let hrp = parse_hrp(hrp)?;
    let version = Fe32::try_from(version)
        .map_err(|_| AddressError::InvalidWitnessProgram(format!("version {}", version)))?;
    bech32::segwit::encode(hrp, version, program)
        .map_err(|e| AddressError::InvalidWitnessProgram(e.to_string()))
}

pub fn decode_segwit(s: &str, expected_hrp: &str) -> Result<WitnessProgram, AddressError> {
    check_hrp(s, expected_hrp)?;

    match bech32::segwit::decode(s) {
        Ok((_, version, program)) => Ok(WitnessProgram {
            version: version.to_u8(),
            program,
        }),
        Err(e) => {
            // 校验和本身有效，说明是见证版本/长度/变体不合规
            let checksum_ok = CheckedHrpstring::new::<Bech32>(s).is_ok()
                || CheckedHrpstring::new::<Bech32m>(s).is_ok();
            if checksum_ok {
                Err(AddressError::InvalidWitnessProgram(e.to_string()))
            } else {
                Err(AddressError::InvalidChecksum)
            }
        }
    }
}

/// 解析字符串结构并比较 hrp（大小写不敏感），拒绝大小写混用
fn check_hrp(s: &str, expected_hrp: &str) -> Result<(), AddressError> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::format("bech32 string mixes upper and lower case"));
    }

    let unchecked = UncheckedHrpstring::new(s)
        .map_err(|e| AddressError::format(format!("bech32: {}", e)))?;

    let found = unchecked.hrp().to_string().to_ascii_lowercase();
    if found != expected_hrp {
        return Err(AddressError::InvalidHrp {
            expected: expected_hrp.to_string(),
            found,
        });
    }
    Ok(())
}

fn parse_hrp(hrp: &str) -> Result<Hrp, AddressError> {
    Hrp::parse(hrp).map_err(|e| AddressError::format(format!("hrp {}: {}", hrp, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_segwit_v0() {
        let wp = decode_segwit("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4", "bc").unwrap();
        assert_eq!(wp.version, 0);
        assert_eq!(
            hex::encode(wp.program),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_decode_segwit_uppercase() {
        let wp = decode_segwit("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4", "bc").unwrap();
        assert_eq!(wp.program.len(), 20);
    }

    #[test]
    fn test_decode_taproot() {
        let wp = decode_segwit(
            "bc1p5d7rjq7g6rdk2yhzks9smlaqtedr4dekq08ge8ztwac72sfr9rusxg3297",
            "bc",
        )
        .unwrap();
        assert_eq!(wp.version, 1);
        assert_eq!(
            hex::encode(wp.program),
            "a37c3903c8d0db6512e2b40b0dffa05e5a3ab73603ce8c9c4b7771e5412328f9"
        );
    }

    #[test]
    fn test_segwit_errors() {
        assert_eq!(
            decode_segwit("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5", "bc"),
            Err(AddressError::InvalidChecksum)
        );
        assert!(matches!(
            decode_segwit("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4", "ltc"),
            Err(AddressError::InvalidHrp { .. })
        ));
        // v0 程序使用 bech32m 校验和
        assert!(matches!(
            decode_segwit("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kemeawh", "bc"),
            Err(AddressError::InvalidWitnessProgram(_))
        ));
        // v2 程序使用 bech32 校验和
        assert!(matches!(
            decode_segwit("bc1zw508d6qejxtdg4y5r3zarvaryvqyzf3du", "bc"),
            Err(AddressError::InvalidWitnessProgram(_))
        ));
        assert!(matches!(
            decode_segwit("bc1Qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4", "bc"),
            Err(AddressError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_encode_segwit() {
        let program = hex::decode("c494c4cb388e23fe24a93158d6cd1fbdca8ebb73").unwrap();
        assert_eq!(
            encode_segwit("bc", 0, &program).unwrap(),
            "bc1qcj2vfjec3c3luf9fx9vddnglhh9gawmncmgxhz"
        );
    }

    #[test]
    fn test_plain_bech32_roundtrip() {
        let data = hex::decode("bffe47abfaede50419c577f1074fee6dd1535cd1").unwrap();
        let encoded = encode("bnb", &data, Variant::Bech32).unwrap();
        assert_eq!(encoded, "bnb1hlly02l6ahjsgxw9wlcswnlwdhg4xhx38yxpd5");
        assert_eq!(decode_exact(&encoded, "bnb", Variant::Bech32, 20).unwrap(), data);
        assert!(matches!(
            decode_exact(&encoded, "bnb", Variant::Bech32, 32),
            Err(AddressError::InvalidLength { expected: 32, found: 20 })
        ));
    }

    #[test]
    fn test_long_bech32_accepted() {
        // Cardano 基础地址 103 字符
        let addr = "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x";
        let data = decode(addr, "addr", Variant::Bech32).unwrap();
        assert_eq!(data.len(), 57);
        assert_eq!(data[0], 0x01);
    }
}

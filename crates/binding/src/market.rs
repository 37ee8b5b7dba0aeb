//! BabyNameMarket interface descriptor.

use alloy_json_abi::JsonAbi;
use serde_json::Value;
use std::sync::LazyLock;

/// Raw contents of `abi/BabyNameMarket.json`.
pub const ABI_JSON: &str = include_str!("../abi/BabyNameMarket.json");

/// BabyNameMarket ABI, parsed once on first access.
///
/// A missing file fails the build. A malformed one panics here, there is no
/// usable state without it.
pub static ABI: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(ABI_JSON).expect("abi/BabyNameMarket.json must be valid JSON")
});

/// Borrow the process-wide ABI document.
pub fn abi() -> &'static Value {
    &ABI
}

/// Typed view of the ABI (functions, events, errors).
pub fn json_abi() -> Result<JsonAbi, serde_json::Error> {
    serde_json::from_str(ABI_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_json_abi::StateMutability;

    #[test]
    fn test_abi_is_verbatim_document() {
        let expected: Value = serde_json::from_str(ABI_JSON).unwrap();
        assert_eq!(*abi(), expected);
        assert!(abi().as_array().is_some_and(|items| !items.is_empty()));
    }

    #[test]
    fn test_abi_loaded_once() {
        assert!(std::ptr::eq(abi(), abi()));
    }

    #[test]
    fn test_json_abi_functions() {
        let contract = json_abi().unwrap();

        let buy = &contract.function("buyShares").unwrap()[0];
        assert_eq!(buy.state_mutability, StateMutability::Payable);
        assert_eq!(buy.inputs.len(), 2);

        let market = &contract.function("getMarket").unwrap()[0];
        assert_eq!(market.state_mutability, StateMutability::View);
        assert!(contract.constructor().is_some());
    }

    #[test]
    fn test_json_abi_events() {
        let contract = json_abi().unwrap();
        let names: Vec<&str> = contract.events().map(|e| e.name.as_str()).collect();

        for event in ["MarketCreated", "SharesBought", "SharesSold", "MarketResolved", "Claimed"] {
            assert!(names.contains(&event), "missing event {event}");
        }
    }
}

use inline_optional::{OptionalValue, NO_VALUE};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Assign(i16),
    Reset,
    Emplace(i16),
    SwapWithSpare,
    MoveFromSpare,
    CopyFromSpare,
    TakeValue,
    SetSpare(Option<i16>),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i16>().prop_map(Operation::Assign),
        Just(Operation::Reset),
        any::<i16>().prop_map(Operation::Emplace),
        Just(Operation::SwapWithSpare),
        Just(Operation::MoveFromSpare),
        Just(Operation::CopyFromSpare),
        Just(Operation::TakeValue),
        any::<Option<i16>>().prop_map(Operation::SetSpare),
    ]
}

proptest! {
    #[test]
    fn test_optional_matches_std_option(ops in proptest::collection::vec(operation(), 1..100)) {
        let mut model: (Option<i16>, Option<i16>) = (None, None);
        let mut opt = OptionalValue::<i16>::new();
        let mut spare = OptionalValue::<i16>::new();

        for op in ops {
            match op {
                Operation::Assign(v) => {
                    model.0 = Some(v);
                    opt.assign(v);
                }
                Operation::Reset => {
                    model.0 = None;
                    opt.assign_none(NO_VALUE);
                }
                Operation::Emplace(v) => {
                    model.0 = Some(v);
                    prop_assert_eq!(*opt.emplace(v), v);
                }
                Operation::SwapWithSpare => {
                    core::mem::swap(&mut model.0, &mut model.1);
                    opt.swap(&mut spare);
                }
                Operation::MoveFromSpare => {
                    model.0 = model.1.take();
                    opt.move_from(&mut spare);
                }
                Operation::CopyFromSpare => {
                    model.0 = model.1;
                    opt.assign_from(&spare);
                }
                Operation::TakeValue => {
                    prop_assert_eq!(opt.take_value().ok(), model.0.take());
                }
                Operation::SetSpare(v) => {
                    model.1 = v;
                    spare = OptionalValue::from(v);
                }
            }

            prop_assert_eq!(opt.has_value(), model.0.is_some(), "Presence mismatch");
            prop_assert_eq!(opt.as_ref(), model.0.as_ref(), "Value mismatch");
            prop_assert_eq!(spare.as_ref(), model.1.as_ref(), "Spare mismatch");
            prop_assert_eq!(opt.value_or(-1i16), model.0.unwrap_or(-1));
        }
    }

    #[test]
    fn test_value_roundtrip(v in any::<String>()) {
        let opt = OptionalValue::some(v.clone());
        prop_assert!(opt.has_value());
        prop_assert_eq!(opt.value(), Ok(&v));
        prop_assert_eq!(opt.clone().into_value(), Ok(v));
    }

    #[test]
    fn test_ordering_matches_std_option(a in any::<Option<u8>>(), b in any::<Option<u8>>()) {
        let (oa, ob) = (OptionalValue::<u8>::from(a), OptionalValue::<u8>::from(b));
        prop_assert_eq!(oa.cmp(&ob), a.cmp(&b));
        prop_assert_eq!(oa == ob, a == b);
    }
}

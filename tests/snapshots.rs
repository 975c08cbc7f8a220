//! Concrete boundary scenarios, snapshotted with `insta`'s inline form so
//! the expected value lives next to the assertion rather than in a
//! separate `.snap` file.

use fibdrv_ubn::{fib_doubling, fib_linear, Bignum};

#[test]
fn fib_linear_small_values() {
    let values: Vec<String> = (0..=20).map(|k| fib_linear(k).unwrap().to_string()).collect();
    insta::assert_debug_snapshot!(values, @r###"
    [
        "0",
        "1",
        "1",
        "2",
        "3",
        "5",
        "8",
        "13",
        "21",
        "34",
        "55",
        "89",
        "144",
        "233",
        "377",
        "610",
        "987",
        "1597",
        "2584",
        "4181",
        "6765",
    ]
    "###);
}

#[test]
fn fib_linear_of_one_thousand() {
    insta::assert_snapshot!(fib_linear(1000).unwrap().to_string(), @"43466557686937456435688527675040625802564660517371780402481729089536555417949051890403879840079255169295922593080322634775209689623239873322471161642996440906533187938298969649928516003704476137795166849228875");
}

#[test]
fn fib_doubling_matches_linear_at_one_thousand() {
    assert_eq!(
        fib_linear(1000).unwrap().to_string(),
        fib_doubling(1000).unwrap().to_string()
    );
}

#[test]
fn fib_of_zero_and_one_are_the_base_cases() {
    assert_eq!(fib_linear(0).unwrap().to_string(), "0");
    assert_eq!(fib_linear(1).unwrap().to_string(), "1");
    assert_eq!(fib_doubling(0).unwrap().to_string(), "0");
    assert_eq!(fib_doubling(1).unwrap().to_string(), "1");
}

#[test]
fn squaring_two_to_the_128_minus_one_matches_the_known_value() {
    let base = "340282366920938463463374607431768211455".parse::<Bignum>().unwrap();
    let squared = Bignum::square(&base).unwrap();
    insta::assert_snapshot!(squared.to_string(), @"115792089237316195423570985008687907852589419931798687112530834793049593217025");
}

#[test]
fn fib_of_a_large_k_has_the_expected_digit_count() {
    // F(10_000) has 2090 decimal digits.
    let rendered = fib_linear(10_000).unwrap().to_string();
    assert_eq!(rendered.len(), 2090);
    assert_eq!(rendered, fib_doubling(10_000).unwrap().to_string());
}

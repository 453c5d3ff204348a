use afl::fuzz;
use dd_idcard::{
    check_character_for, classify, convert_15_to_18, get_age, get_birth_date, get_region,
    get_sex, validate_15, validate_18, validate_id_card_10, IdCardScheme, MIN_BIRTH_YEAR,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let current_year = rng.gen_range(MIN_BIRTH_YEAR + 1..2200);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Current year: {:?}", current_year);
    }

    // None of these may panic, whatever the input
    let scheme = classify(input, current_year);
    let _ = get_birth_date(input);
    let _ = get_age(input, current_year);
    let _ = get_region(input);
    let _ = get_sex(input);
    let _ = validate_id_card_10(input);

    #[cfg(feature = "manual_test")]
    println!("Scheme: {:?}", scheme);

    if validate_18(input) {
        assert_eq!(
            check_character_for(&input[..17]).ok(),
            input.chars().last().map(|c| c.to_ascii_uppercase())
        );
        assert_eq!(scheme, Some(IdCardScheme::Mainland18));
    }
    if validate_15(input, current_year) {
        let converted = convert_15_to_18(input).expect("legal legacy numbers convert");
        assert!(validate_18(&converted));
        assert_eq!(get_birth_date(input), get_birth_date(&converted));
        assert_eq!(get_sex(input), get_sex(&converted));
    }
}

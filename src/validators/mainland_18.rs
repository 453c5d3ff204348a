use crate::checksum::{parse_body, validate_check_character, BODY_LENGTH};
use crate::convert::ID_LENGTH;
use crate::error::IdCardError;
use crate::validators::Validator;

pub struct MainlandId18;

impl Validator for MainlandId18 {
    fn check(&self, id_number: &str, _current_year: i32) -> Result<(), IdCardError> {
        if id_number.len() != ID_LENGTH {
            return Err(IdCardError::Format);
        }
        let (Some(body), Some(check)) =
            (id_number.get(..BODY_LENGTH), id_number.get(BODY_LENGTH..))
        else {
            return Err(IdCardError::Format);
        };
        let digits = parse_body(body)?;

        let candidate = match check.as_bytes() {
            [c @ (b'0'..=b'9' | b'X' | b'x')] => *c as char,
            _ => return Err(IdCardError::Format),
        };
        if validate_check_character(&digits, candidate) {
            Ok(())
        } else {
            Err(IdCardError::Checksum)
        }
    }
}

/// Whether `id_number` is a well formed 18-character number with a matching check character.
/// The region prefix and birth date are not checked.
pub fn validate_18(id_number: &str) -> bool {
    MainlandId18.is_valid(id_number, 0)
}

#[cfg(test)]
mod test {
    use crate::error::IdCardError;
    use crate::validators::*;

    #[test]
    fn test_valid_ids() {
        let valid_ids = vec![
            "11010519491231002X",
            "513231200012121657",
            "513231200012121673",
            "51323120001212169X",
            "513231200012121710",
            "51323120001212185X",
            // Same with lowercase x should work
            "51323120001212185x",
            "110101200002290018",
            "440301199003071230",
            // the region is not part of the checksum check
            "000000000000000001",
        ];
        for id in valid_ids {
            println!("testing for input {id}");
            assert!(validate_18(id));
        }
    }

    #[test]
    fn test_invalid_ids() {
        let invalid_ids = vec![
            // wrong checksum
            ("513231200012121293", IdCardError::Checksum),
            ("110105194912310020", IdCardError::Checksum),
            // non digit characters
            ("a13231200012121293", IdCardError::Format),
            ("11010519491231002Y", IdCardError::Format),
            // wrong length
            ("11010519491231002", IdCardError::Format),
            ("11010519491231002X1", IdCardError::Format),
            ("", IdCardError::Format),
            // Non utf-8 characters 18 bytes
            ("513231200012Àñô", IdCardError::Format),
            ("1101051949123100À", IdCardError::Format),
        ];
        for (id, error) in invalid_ids {
            println!("testing for input {id}");
            assert_eq!(MainlandId18.check(id, 2026), Err(error));
            assert!(!validate_18(id));
        }
    }

    #[test]
    fn single_character_changes_break_the_checksum() {
        let id = "11010519491231002X";
        for position in 0..17 {
            let mut tampered: Vec<u8> = id.bytes().collect();
            tampered[position] = if tampered[position] == b'9' {
                b'0'
            } else {
                tampered[position] + 1
            };
            let tampered = String::from_utf8(tampered).unwrap();
            println!("testing for input {tampered}");
            assert!(!validate_18(&tampered));
        }
    }
}

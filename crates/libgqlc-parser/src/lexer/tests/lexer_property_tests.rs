use crate::lexer::Lexer;
use crate::lexer::validate_name;
use crate::token::TokenKind;
use proptest::prelude::*;

proptest! {
    /// Every string matching the name grammar lexes as a single name token.
    #[test]
    fn valid_names_lex_as_one_token(name in "[_A-Za-z][_A-Za-z0-9]{0,24}") {
        prop_assume!(name != "null");
        let tokens: Vec<_> = Lexer::new(&name).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Name);
        prop_assert_eq!(tokens[0].text, name.as_str());
        prop_assert!(validate_name(&name).is_ok());
    }

    /// A name-shaped string with an invalid first character is rejected at
    /// offset 0.
    #[test]
    fn invalid_first_character_rejected(
        first in "[0-9\\-!%*]",
        rest in "[_A-Za-z0-9]{0,10}",
    ) {
        let candidate = format!("{first}{rest}");
        let offending = validate_name(&candidate).unwrap_err();
        prop_assert_eq!(offending.0, 0);
    }

    /// Integers without leading zeros always lex as one `IntValue`.
    #[test]
    fn integers_lex_as_int_value(value in any::<i64>()) {
        let source = value.to_string();
        let tokens: Vec<_> = Lexer::new(&source).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::IntValue);
        prop_assert_eq!(tokens[0].text, source.as_str());
    }

    /// Floats in `d.d` and `d.deE` forms lex as one `FloatValue`.
    #[test]
    fn floats_lex_as_float_value(
        negative in any::<bool>(),
        int_part in "(0|[1-9][0-9]{0,5})",
        frac in "[0-9]{1,5}",
        exp in proptest::option::of("[eE][+-]?[0-9]{1,3}"),
    ) {
        let source = format!(
            "{}{int_part}.{frac}{}",
            if negative { "-" } else { "" },
            exp.unwrap_or_default(),
        );
        let tokens: Vec<_> = Lexer::new(&source).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::FloatValue);
    }
}

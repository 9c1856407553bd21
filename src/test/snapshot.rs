#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use crate::api::{QuotePayload, load_equity_details, load_quote_payload, parse_quote_payload};

    const LIVE_BOARD: &str = r#"[
        {"name": "MTNGH", "price": 1.5, "change": 0.02, "volume": 1000},
        {"name": "GCB", "price": 5, "change": -0.1, "volume": 200}
    ]"#;

    const EQUITY_LIST: &str = r#"[
        {"name": "MTNGH", "price": 1.5},
        {"name": "CAL", "price": 0.8}
    ]"#;

    const EQUITY_DETAIL: &str = r#"{
        "name": "EGH",
        "price": 6.25,
        "capital": 1000000,
        "dps": 0.2,
        "eps": null,
        "shares": 321,
        "company": {
            "name": "Ecobank Ghana",
            "sector": "Financials",
            "directors": [{"name": "A. Mensah", "position": "Chair"}]
        }
    }"#;

    #[test]
    fn parse_live_board() {
        let payload = parse_quote_payload(LIVE_BOARD).unwrap();

        let rows = payload.live().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(*rows[1].change(), dec!(-0.1));
        assert_eq!(*rows[0].volume(), 1000);

        let prices = payload.into_price_map();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.get("gcb"), Some(dec!(5)));
    }

    #[test]
    fn parse_equity_list() {
        let payload = parse_quote_payload(EQUITY_LIST).unwrap();

        assert!(matches!(payload, QuotePayload::Summaries(_)));
        assert!(payload.live().is_none());

        let prices = payload.into_price_map();
        assert_eq!(prices.get("CAL"), Some(dec!(0.8)));
        assert_eq!(prices.get("EGH"), None);
    }

    #[test]
    fn parse_equity_detail() {
        let payload = parse_quote_payload(EQUITY_DETAIL).unwrap();

        match &payload {
            QuotePayload::Detail(equity) => {
                assert_eq!(equity.name(), "EGH");
                assert_eq!(*equity.shares(), Some(321));
                assert_eq!(equity.company().directors().len(), 1);
                assert_eq!(*equity.company().industry(), None);
            }
            other => panic!("Unexpected payload: {:?}", other),
        }

        let prices = payload.into_price_map();
        assert_eq!(prices.get("EGH"), Some(dec!(6.25)));
    }

    #[test]
    fn negative_prices_are_dropped() {
        let payload =
            parse_quote_payload(r#"[{"name": "BAD", "price": -1}, {"name": "OK", "price": 2}]"#)
                .unwrap();

        let prices = payload.into_price_map();
        assert!(!prices.contains("BAD"));
        assert_eq!(prices.get("OK"), Some(dec!(2)));
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert!(parse_quote_payload(r#"[{"name": "MTNGH"}]"#).is_err());
        assert!(parse_quote_payload(r#""MTNGH""#).is_err());
        assert!(parse_quote_payload("not json").is_err());
    }

    #[test]
    fn empty_board_is_live() {
        let payload = parse_quote_payload("[]").unwrap();

        assert_eq!(payload.live().map(|rows| rows.len()), Some(0));
        assert!(payload.into_price_map().is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LIVE_BOARD.as_bytes()).unwrap();

        let payload = load_quote_payload(file.path()).unwrap();

        assert_eq!(payload.live().map(|rows| rows.len()), Some(2));
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_quote_payload(&dir.path().join("quotes.json"));

        assert!(result.is_err());
    }

    #[test]
    fn rows_without_volume_decode_as_equity_list() {
        let payload = parse_quote_payload(
            r#"[{"name": "MTNGH", "price": 1.5, "change": 0.02, "volume": 10}, {"name": "CAL", "price": 0.8}]"#,
        )
        .unwrap();

        assert!(matches!(payload, QuotePayload::Summaries(ref rows) if rows.len() == 2));
    }

    #[test]
    fn equity_details_from_files() {
        let mut detail = NamedTempFile::new().unwrap();
        detail.write_all(EQUITY_DETAIL.as_bytes()).unwrap();

        let equities = load_equity_details(&[detail.path()]).unwrap();

        assert_eq!(equities.len(), 1);
        assert_eq!(*equities[0].shares(), Some(321));
    }

    #[test]
    fn equity_details_reject_other_shapes() {
        let mut board = NamedTempFile::new().unwrap();
        board.write_all(LIVE_BOARD.as_bytes()).unwrap();

        let err = load_equity_details(&[board.path()]).unwrap_err();

        assert!(format!("{:#}", err).contains("Expected an equity detail snapshot"));
    }
}

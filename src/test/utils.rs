#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use crate::{
        app::utils::{load_portfolio, parse_portfolio},
        models::{PriceMap, TransactionType},
    };

    const PORTFOLIO: &str = r#"{
        "id": "9f1c",
        "name": "Retirement",
        "created_at": "2025-01-15T09:30:00Z",
        "updated_at": "2025-02-01T11:00:00Z",
        "items": [
            {"symbol": "MTNGH", "quantity": 100, "average_buy_price": 2.5}
        ],
        "transactions": [
            {
                "id": "t-1",
                "symbol": "MTNGH",
                "transaction_type": "Buy",
                "quantity": 100,
                "price_per_share": 2.5,
                "timestamp": "2025-02-01T11:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn parse_valid_portfolio() {
        let portfolio = parse_portfolio(PORTFOLIO).unwrap();

        assert_eq!(portfolio.name(), "Retirement");
        assert_eq!(*portfolio.items()[0].average_buy_price(), dec!(2.5));
        assert_eq!(
            *portfolio.transactions()[0].transaction_type(),
            TransactionType::Buy
        );
    }

    #[test]
    fn items_default_to_empty() {
        let portfolio = parse_portfolio(
            r#"{"id": "1", "name": "New", "created_at": "2025-01-15T09:30:00Z", "updated_at": "2025-01-15T09:30:00Z"}"#,
        )
        .unwrap();

        assert!(portfolio.items().is_empty());
        assert!(portfolio.transactions().is_empty());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let text = PORTFOLIO.replacen("\"quantity\": 100", "\"quantity\": -100", 1);

        assert!(parse_portfolio(&text).is_err());
    }

    #[test]
    fn duplicate_holdings_are_rejected() {
        let text = PORTFOLIO.replace(
            r#"{"symbol": "MTNGH", "quantity": 100, "average_buy_price": 2.5}"#,
            r#"{"symbol": "MTNGH", "quantity": 100, "average_buy_price": 2.5},
               {"symbol": "MTNGH", "quantity": 5, "average_buy_price": 3}"#,
        );

        let err = parse_portfolio(&text).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate holding for symbol MTNGH"));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PORTFOLIO.as_bytes()).unwrap();

        let portfolio = load_portfolio(file.path()).unwrap();

        assert_eq!(portfolio.id(), "9f1c");
        assert_eq!(portfolio.net_invested(), dec!(250));
    }

    #[test]
    fn price_map_from_json() {
        let prices: PriceMap = serde_json::from_str(r#"{"mtngh": 3.0, "GCB": 1.25}"#).unwrap();

        assert_eq!(prices.get("MTNGH"), Some(dec!(3.0)));
        assert_eq!(prices.get("gcb"), Some(dec!(1.25)));
        assert_eq!(prices.len(), 2);
    }
}

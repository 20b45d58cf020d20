//! # Integration Test Flows
//!
//! End-to-end coverage of the deployed system: genesis funding, token
//! transfers over the shared ledger handle, and balance-gated file storage
//! through the invoice service.
//!
//! ## Flows Tested
//!
//! 1. **Deployment**: genesis credits the full supply to the owner
//! 2. **Transfers**: tokens move between accounts, failures leave state alone
//! 3. **File storage**: the registry gate follows live ledger balances
//! 4. **Composition**: mixed transfer and storage traffic stays conserved

#[cfg(test)]
mod tests {
    use std::sync::Once;

    use med_invoice::{
        application::service::InvoiceService, domain::errors::RegistryError,
        ports::inbound::InvoiceApi,
    };
    use med_types::{Address, Bytes, U256};
    use ppt_ledger::adapters::shared::SharedLedger;
    use ppt_ledger::domain::entities::Genesis;
    use ppt_ledger::domain::errors::LedgerError;
    use ppt_ledger::domain::services::{format_units, parse_units};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    static TRACING: Once = Once::new();

    /// Installs the fmt subscriber once for the whole suite; honours RUST_LOG.
    fn init_tracing() {
        TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        });
    }

    /// The deployment account, funded with the entire supply at genesis.
    fn owner() -> Address {
        let bytes = hex::decode("f39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        Address::from_slice(&bytes).unwrap()
    }

    fn addr(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    /// Genesis supply: 1,000,000 whole tokens in base units.
    fn test_supply() -> U256 {
        parse_units("1000000", 18).unwrap()
    }

    fn fifty_tokens() -> U256 {
        parse_units("50", 18).unwrap()
    }

    /// Boots a genesis-funded shared ledger and an invoice service gated on it.
    fn create_system() -> (SharedLedger, InvoiceService<SharedLedger>) {
        init_tracing();
        let ledger = SharedLedger::new(Genesis::new(test_supply(), owner()));
        let service = InvoiceService::new(ledger.clone());
        (ledger, service)
    }

    // =============================================================================
    // DEPLOYMENT
    // =============================================================================

    #[test]
    fn test_genesis_sets_total_supply_and_metadata() {
        let (ledger, _service) = create_system();

        assert_eq!(ledger.total_supply(), test_supply());

        let metadata = ledger.metadata();
        assert_eq!(metadata.name, "PPT Token");
        assert_eq!(metadata.symbol, "PPT");
        assert_eq!(metadata.decimals, 18);
    }

    #[test]
    fn test_owner_holds_entire_supply() {
        let (ledger, _service) = create_system();

        assert_eq!(ledger.balance_of(&owner()), ledger.total_supply());
        assert!(ledger.balance_of(&addr(0x01)).is_zero());
        assert!(ledger.is_conserved());
    }

    // =============================================================================
    // TRANSFERS
    // =============================================================================

    #[test]
    fn test_transfer_moves_tokens_between_accounts() {
        let (ledger, _service) = create_system();
        let addr1 = addr(0x01);

        ledger.transfer(&owner(), &addr1, fifty_tokens()).unwrap();

        assert_eq!(ledger.balance_of(&addr1), fifty_tokens());
        assert_eq!(
            ledger.balance_of(&owner()),
            parse_units("999950", 18).unwrap()
        );
        assert_eq!(format_units(ledger.balance_of(&owner()), 18), "999950");
    }

    #[test]
    fn test_consecutive_transfers_accumulate() {
        let (ledger, _service) = create_system();
        let addr1 = addr(0x01);

        ledger.transfer(&owner(), &addr1, fifty_tokens()).unwrap();
        ledger.transfer(&owner(), &addr1, fifty_tokens()).unwrap();

        assert_eq!(ledger.balance_of(&addr1), parse_units("100", 18).unwrap());
        assert_eq!(
            ledger.balance_of(&owner()),
            parse_units("999900", 18).unwrap()
        );
        assert!(ledger.is_conserved());
    }

    #[test]
    fn test_transfer_without_funds_is_rejected() {
        let (ledger, _service) = create_system();
        let addr1 = addr(0x01);
        let addr2 = addr(0x02);
        let one_token = parse_units("1", 18).unwrap();

        let err = ledger.transfer(&addr1, &addr2, one_token).unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                required: one_token,
                available: U256::zero(),
            }
        );
        // Nothing moved: owner still holds everything.
        assert_eq!(ledger.balance_of(&owner()), test_supply());
        assert!(ledger.balance_of(&addr1).is_zero());
        assert!(ledger.balance_of(&addr2).is_zero());
        assert!(ledger.is_conserved());
    }

    // =============================================================================
    // FILE STORAGE
    // =============================================================================

    #[test]
    fn test_funded_account_stores_and_reads_file() {
        let (ledger, mut service) = create_system();
        let addr1 = addr(0x01);
        let payload = Bytes::from("test-file-content");

        ledger.transfer(&owner(), &addr1, fifty_tokens()).unwrap();
        assert_eq!(service.get_user_tokens(&addr1), fifty_tokens());

        service.save_file(&addr1, payload.clone()).unwrap();

        assert_eq!(service.get_files(&addr1), vec![payload]);
    }

    #[test]
    fn test_tokenless_account_cannot_store() {
        let (_ledger, mut service) = create_system();
        let stranger = addr(0x07);

        let err = service
            .save_file(&stranger, Bytes::from("test-file-content"))
            .unwrap_err();

        assert_eq!(err, RegistryError::Unauthorized { account: stranger });
        assert!(service.get_files(&stranger).is_empty());
    }

    #[test]
    fn test_files_keep_acceptance_order() {
        let (_ledger, mut service) = create_system();

        service.save_file(&owner(), Bytes::from("P1")).unwrap();
        service.save_file(&owner(), Bytes::from("P2")).unwrap();
        service.save_file(&owner(), Bytes::from("P3")).unwrap();

        assert_eq!(
            service.get_files(&owner()),
            vec![Bytes::from("P1"), Bytes::from("P2"), Bytes::from("P3")]
        );
    }

    #[test]
    fn test_files_survive_full_balance_drain() {
        let (ledger, mut service) = create_system();
        let addr1 = addr(0x01);
        let stake = parse_units("10", 18).unwrap();

        ledger.transfer(&owner(), &addr1, stake).unwrap();
        service.save_file(&addr1, Bytes::from("archived")).unwrap();

        // Hand everything back; history must remain readable.
        ledger.transfer(&addr1, &owner(), stake).unwrap();

        assert_eq!(service.get_files(&addr1), vec![Bytes::from("archived")]);
        assert!(service.get_user_tokens(&addr1).is_zero());
        assert!(service
            .save_file(&addr1, Bytes::from("too-late"))
            .is_err());
    }

    #[test]
    fn test_get_user_tokens_reports_ledger_balance() {
        let (_ledger, service) = create_system();

        assert_eq!(service.get_user_tokens(&owner()), test_supply());
        assert!(service.get_user_tokens(&addr(0x01)).is_zero());
    }

    // =============================================================================
    // COMPOSITION
    // =============================================================================

    #[test]
    fn test_mixed_traffic_stays_conserved() {
        let (ledger, mut service) = create_system();
        let addr1 = addr(0x01);
        let addr2 = addr(0x02);

        ledger
            .transfer(&owner(), &addr1, parse_units("100", 18).unwrap())
            .unwrap();
        ledger
            .transfer(&owner(), &addr2, parse_units("200", 18).unwrap())
            .unwrap();

        service.save_file(&owner(), Bytes::from("owner-doc")).unwrap();
        service.save_file(&addr1, Bytes::from("a1-doc-1")).unwrap();
        service.save_file(&addr1, Bytes::from("a1-doc-2")).unwrap();
        service.save_file(&addr2, Bytes::from("a2-doc")).unwrap();

        // addr2 exits; its documents stay, its gate closes.
        ledger
            .transfer(&addr2, &owner(), parse_units("200", 18).unwrap())
            .unwrap();
        assert!(service.save_file(&addr2, Bytes::from("refused")).is_err());

        assert!(ledger.is_conserved());
        assert_eq!(ledger.total_supply(), test_supply());

        let stats = service.stats();
        assert_eq!(stats.accounts, 3);
        assert_eq!(stats.total_files, 4);
        assert_eq!(service.get_files(&addr1).len(), 2);
        assert_eq!(service.get_files(&addr2), vec![Bytes::from("a2-doc")]);
    }
}

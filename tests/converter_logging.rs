// Contrato de log do conversor: um error por falha, um debug por sucesso.
use berlin_clock::BerlinClockConverter;
use berlin_clock::ClockLog;
use berlin_clock::TimeConverter;
use mockall::mock;
use mockall::predicate::eq;

mock! {
    pub Log {}

    impl ClockLog for Log {
        fn debug(&self, msg: &str);
        fn error(&self, msg: &str);
    }
}

#[test]
fn success_logs_rendered_clock_once()
{
    let mut log = MockLog::new();
    log.expect_debug()
        .with(eq("Y\nRRRR\nRRRO\nYYRYYRYYRYY\nYYYY"))
        .times(1)
        .return_const(());
    log.expect_error().never();

    let converter = BerlinClockConverter::new(log);
    assert_eq!(converter.convert_time("23:59:59").unwrap(), "Y\nRRRR\nRRRO\nYYRYYRYYRYY\nYYYY");
}

#[test]
fn invalid_format_logs_error_once()
{
    let mut log = MockLog::new();
    log.expect_error()
        .with(eq("Time must be a string between 0:00:00 (or 00:00:00) and 24:59:59."))
        .times(1)
        .return_const(());
    log.expect_debug().never();

    let converter = BerlinClockConverter::new(log);
    assert!(converter.convert_time("25:00:00").is_err());
}

#[test]
fn structured_conversion_follows_the_same_contract()
{
    let mut log = MockLog::new();
    log.expect_debug().times(1).return_const(());
    log.expect_error().times(1).return_const(());

    let converter = BerlinClockConverter::new(log);
    let clock = converter.convert("13:17:01").unwrap();
    assert_eq!(clock.render(), "Y\nRROO\nRRRO\nYYROOOOOOOO\nYYOO");
    assert!(converter.convert("12:3:4").is_err());
}

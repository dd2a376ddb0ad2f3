use evebot::bot::parser::{BotCommand, CommandParser};

#[test]
fn test_price_aliases() {
    let parser = CommandParser::new();
    for line in ["!pc Tritanium", "!PC Tritanium", "!price Tritanium"] {
        match parser.parse(line) {
            BotCommand::PriceCheck(args) => assert_eq!(args, "Tritanium"),
            other => panic!("Expected PriceCheck for '{}', got {:?}", line, other),
        }
    }
}

#[test]
fn test_route_and_distance() {
    let parser = CommandParser::new();
    match parser.parse("!jumps Jita Amarr safe") {
        BotCommand::Jumps(args) => assert_eq!(args, "Jita Amarr safe"),
        other => panic!("Expected Jumps, got {:?}", other),
    }
    match parser.parse("!route Jita Amarr") {
        BotCommand::Jumps(_) => {}
        other => panic!("Expected Jumps alias, got {:?}", other),
    }
    match parser.parse("!ly jita amarr") {
        BotCommand::LightYears(args) => assert_eq!(args, "jita amarr"),
        other => panic!("Expected LightYears, got {:?}", other),
    }
}

#[test]
fn test_who_keeps_spaces_in_name() {
    let parser = CommandParser::new();
    match parser.parse("!who  The Mittani ") {
        BotCommand::Who(args) => assert_eq!(args, "The Mittani"),
        other => panic!("Expected Who, got {:?}", other),
    }
}

#[test]
fn test_help() {
    let parser = CommandParser::new();
    assert_eq!(parser.parse("!help"), BotCommand::Help);
    assert_eq!(parser.parse("!?"), BotCommand::Help);
}

#[test]
fn test_missing_prefix_and_suffix_variants() {
    let parser = CommandParser::new();
    assert_eq!(parser.parse("pc Tritanium"), BotCommand::Unknown);
    assert_eq!(parser.parse("!whois bob"), BotCommand::Unknown);
    assert_eq!(parser.parse("!"), BotCommand::Unknown);
}

#[test]
fn test_alternate_prefix() {
    let parser = CommandParser::with_prefix('^');
    assert_eq!(parser.parse("^ly a b"), BotCommand::LightYears("a b".into()));
    assert_eq!(parser.parse("!ly a b"), BotCommand::Unknown);
}

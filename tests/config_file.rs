use evebot::config::Config;

#[tokio::test]
async fn default_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();
    Config::create_default(path).await.unwrap();
    let loaded = Config::load(path).await.unwrap();
    assert_eq!(loaded.bot.prefix_char(), '!');
    assert_eq!(loaded.esi.price_ttl_minutes, 120);
    assert_eq!(loaded.zkill.base_url, "https://zkillboard.com/api");
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(Config::load(path.to_str().unwrap()).await.is_err());
}

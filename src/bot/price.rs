//! `!pc <item>`: resolve an item and quote its cached market price.

use log::debug;

use crate::eve::errors::PriceError;
use crate::eve::prices::PriceCache;
use crate::eve::resolver::{resolve_item, Resolution};
use crate::eve::EveApi;
use crate::sde::{ItemFilter, SdeResult, StaticData};

pub fn usage(prefix: char) -> String {
    format!("usage: {}pc <item name>", prefix)
}

pub async fn price_check<A: EveApi>(
    sde: &StaticData,
    prices: &mut PriceCache,
    api: &A,
    prefix: char,
    args: &str,
) -> SdeResult<String> {
    let query = args.trim();
    if query.is_empty() {
        return Ok(usage(prefix));
    }

    let item = match resolve_item(sde, query, ItemFilter::Market)? {
        Resolution::Resolved(item) => item,
        other => return Ok(other.describe_failure().unwrap_or_default()),
    };

    match prices.get_price(api, item.id).await {
        Ok(quote) => Ok(format!("{}: {}", item.name, quote)),
        Err(PriceError::UnknownType(id)) => {
            debug!("No price entry for {} ({})", item.name, id);
            Ok(format!("{}: no market data", item.name))
        }
    }
}

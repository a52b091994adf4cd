/*
[INPUT]:  Coin symbols, pair filters and optional deposit amounts
[OUTPUT]: Coins, tradable pairs, single and bulk rate quotes
[POS]:    HTTP layer - market discovery and pricing endpoints
[UPDATE]: When adding new pricing endpoints or changing request shapes
*/

use crate::http::{CoinswitchClient, Result};
use crate::types::{BulkRatePair, Coin, CoinPair, ExchangeRate, PairQuery, RateRequest, TradePair};

impl CoinswitchClient {
    /// List every coin the exchange knows about
    ///
    /// GET /coins
    pub async fn list_coins(&self) -> Result<Vec<Coin>> {
        self.get(&["coins"]).await
    }

    /// Exchange pairs for a chosen deposit and/or destination coin
    ///
    /// POST /pairs
    pub async fn list_exchange_pairs(&self, query: &PairQuery) -> Result<Vec<CoinPair>> {
        query.validate()?;
        self.post(&["pairs"], query).await
    }

    /// Generate an exchange offer for a coin pair
    ///
    /// POST /rate
    pub async fn get_exchange_rate(&self, request: &RateRequest) -> Result<ExchangeRate> {
        request.validate()?;
        self.post(&["rate"], request).await
    }

    /// Offers for every pair touching one coin, or for one fully specified pair
    ///
    /// POST /bulk-rate
    pub async fn get_bulk_rates(&self, query: &PairQuery) -> Result<Vec<BulkRatePair>> {
        query.validate()?;
        self.post(&["bulk-rate"], query).await
    }

    /// Offers for several pairs in one request
    ///
    /// POST /bulk-rate
    ///
    /// Pairs the exchange cannot quote are dropped without an error, so the
    /// result can be shorter than `pairs` and is not positionally aligned
    /// with it. Match results with [`BulkRatePair::is_pair`].
    pub async fn get_bulk_rates_for_multi_pairs(
        &self,
        pairs: &[TradePair],
    ) -> Result<Vec<BulkRatePair>> {
        self.post(&["bulk-rate"], pairs).await
    }
}

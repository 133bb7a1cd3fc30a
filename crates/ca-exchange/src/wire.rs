//! Migration wire codec.
//!
//! A batch is an ordered sequence of agent records `{id, x, y, direction,
//! speed}`, bincode-encoded with a leading record count.  An empty batch is
//! a valid, expected message — it is the per-tick "nothing to send" signal,
//! not an absence of a message.

use ca_agent::Agent;

use crate::ExchangeResult;

/// Encode one outbound batch.
pub fn encode_batch(agents: &[Agent]) -> ExchangeResult<Vec<u8>> {
    Ok(bincode::serialize(agents)?)
}

/// Decode one inbound batch, preserving record order.
pub fn decode_batch(bytes: &[u8]) -> ExchangeResult<Vec<Agent>> {
    Ok(bincode::deserialize(bytes)?)
}

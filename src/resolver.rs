//! Single-shot DNS resolver client.
//!
//! Issues one A-record query per hostname over UDP and maps the upstream
//! response code to a [`DnsStatus`]. Builds and parses wire messages with
//! `hickory-proto` directly; there is no retry, no fallback resolver, and no
//! caching. Every failure mode degrades to `Unknown` rather than erroring.

use std::net::SocketAddr;
use std::time::Duration;

use hickory_proto::error::ProtoError;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use thiserror::Error;
use tokio::net::UdpSocket;

use crate::types::DnsStatus;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("DNS wire format error: {0}")]
    Proto(#[from] ProtoError),
    #[error("UDP transport error: {0}")]
    Io(#[from] std::io::Error),
}

/// Client for a fixed upstream resolver endpoint.
#[derive(Debug, Clone)]
pub struct DnsClient {
    server: SocketAddr,
    timeout: Duration,
}

impl DnsClient {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self { server, timeout }
    }

    /// Resolve one fully-qualified hostname to a status.
    ///
    /// Exactly one query is sent. Transport failures, timeouts and response
    /// codes outside the recognized set all map to `Unknown`.
    pub async fn query_a(&self, fqdn: &str) -> DnsStatus {
        let name = match Name::from_ascii(fqdn) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(host = fqdn, "Not a queryable hostname: {}", e);
                return DnsStatus::Unknown;
            }
        };

        let id: u16 = rand::random();
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(Query::query(name, RecordType::A));

        let response = match tokio::time::timeout(self.timeout, self.exchange(&message)).await {
            Ok(Ok(r)) => r,
            Ok(Err(e)) => {
                tracing::error!(host = fqdn, "DNS exchange error: {}", e);
                return DnsStatus::Unknown;
            }
            Err(_) => {
                tracing::error!(host = fqdn, "DNS query timed out");
                return DnsStatus::Unknown;
            }
        };

        if response.id() != id {
            tracing::warn!(host = fqdn, "DNS response id mismatch");
            return DnsStatus::Unknown;
        }

        match response.response_code() {
            ResponseCode::NoError => {
                if response.answers().is_empty() {
                    tracing::info!(host = fqdn, "DNS query successful but no answer records");
                    DnsStatus::Down
                } else {
                    DnsStatus::Up
                }
            }
            code @ (ResponseCode::NXDomain
            | ResponseCode::ServFail
            | ResponseCode::Refused
            | ResponseCode::NotAuth
            | ResponseCode::NotZone) => {
                tracing::info!(host = fqdn, rcode = %code, "DNS query returned negative response");
                DnsStatus::Down
            }
            code => {
                tracing::debug!(host = fqdn, rcode = %code, "Unrecognized DNS response code");
                DnsStatus::Unknown
            }
        }
    }

    async fn exchange(&self, message: &Message) -> Result<Message, ExchangeError> {
        let bind_addr: SocketAddr = if self.server.is_ipv6() {
            (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
        } else {
            (std::net::Ipv4Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(self.server).await?;
        socket.send(&message.to_vec()?).await?;

        let mut buf = [0u8; 4096];
        let len = socket.recv(&mut buf).await?;
        Ok(Message::from_vec(&buf[..len])?)
    }
}

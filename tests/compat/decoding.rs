//! Decoder backed by a mocked signature directory

use alloy::primitives::Bytes;
use safe_hashes::decoding::UNKNOWN_METHOD;
use safe_hashes::{decode_transaction_data, FourByteDirectory};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{RECIPIENT, TOKEN, TRANSFER_DATA};

async fn directory(server: &MockServer) -> FourByteDirectory {
    FourByteDirectory::with_base_url(format!("{}/api/v1/signatures/", server.uri()))
}

#[tokio::test]
async fn test_decode_transfer_through_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("hex_signature", "0xa9059cbb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "results": [
                { "id": 145, "text_signature": "transfer(address,uint256)" },
                { "id": 31780, "text_signature": "many_msg_babbage(bytes1)" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data: Bytes = TRANSFER_DATA.parse().unwrap();
    let decoded = decode_transaction_data(&directory(&server).await, TOKEN, &data, 1).await;

    assert_eq!(decoded.method, "transfer");
    assert_eq!(
        decoded.parameter("param0").unwrap().value,
        RECIPIENT.to_string().to_lowercase()
    );
    assert_eq!(decoded.parameter("param1").unwrap().value, "1000000");
}

#[tokio::test]
async fn test_directory_outage_degrades_to_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let data: Bytes = TRANSFER_DATA.parse().unwrap();
    let decoded = decode_transaction_data(&directory(&server).await, TOKEN, &data, 1).await;

    assert_eq!(decoded.method, UNKNOWN_METHOD);
    assert_eq!(decoded.parameters[0].value, TRANSFER_DATA);
}

#[tokio::test]
async fn test_eth_transfer_skips_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let decoded = decode_transaction_data(&directory(&server).await, TOKEN, &Bytes::new(), 1).await;
    assert_eq!(decoded.method, "0x (ETH Transfer)");
}

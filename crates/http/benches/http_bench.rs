use bytes::BytesMut;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use http::{Method, Version};
use micro_http_client::client::Client;
use micro_http_client::codec::{RequestEncoder, ResponseDecoder};
use micro_http_client::connection::{Connect, Resolve};
use micro_http_client::protocol::{Request, ResolveError};
use std::io;
use std::io::{Read, Write};
use std::net::SocketAddr;
use tokio_util::codec::{Decoder, Encoder};

const RESPONSE: &[u8] = b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nServer: bench\r\n\r\nHello World!";

// In-memory stream replaying a canned response
struct MockIO {
    read_data: &'static [u8],
    read_pos: usize,
    write_data: Vec<u8>,
}

impl Read for MockIO {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.read_data[self.read_pos..];
        let amt = std::cmp::min(remaining.len(), buf.len());
        buf[..amt].copy_from_slice(&remaining[..amt]);
        self.read_pos += amt;
        Ok(amt)
    }
}

impl Write for MockIO {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FixedResolver;

impl Resolve for FixedResolver {
    fn resolve(&self, _host: &str, _port: &str) -> Result<Vec<SocketAddr>, ResolveError> {
        Ok(vec![SocketAddr::from(([127, 0, 0, 1], 80))])
    }
}

struct MockConnector;

impl Connect for MockConnector {
    type Stream = MockIO;

    fn connect(&self, _endpoint: &SocketAddr) -> io::Result<Self::Stream> {
        Ok(MockIO { read_data: RESPONSE, read_pos: 0, write_data: Vec::new() })
    }
}

fn bench_request_encoder(c: &mut Criterion) {
    let request = Request::new("localhost")
        .with_path("/api/items")
        .with_query("page=2")
        .with_header("Accept-Language", "en")
        .with_body("Hello World!");

    c.bench_function("encode_simple_request", |b| {
        let mut encoder = RequestEncoder::new(Version::HTTP_10, "bench/1.0");
        b.iter(|| {
            let mut bytes = BytesMut::new();
            encoder.encode((&Method::POST, &request), &mut bytes).unwrap();
            black_box(bytes);
        });
    });
}

fn bench_response_decoder(c: &mut Criterion) {
    c.bench_function("decode_simple_response", |b| {
        b.iter(|| {
            let mut decoder = ResponseDecoder::new(true);
            let mut bytes = BytesMut::from(RESPONSE);
            let header = decoder.decode(&mut bytes).unwrap();
            let body = decoder.decode(&mut bytes).unwrap();
            black_box((header, body));
        });
    });
}

fn bench_client_round_trip(c: &mut Criterion) {
    let client = Client::builder().resolver(FixedResolver).connector(MockConnector).build().unwrap();
    let request = Request::new("localhost").with_path("/");

    c.bench_function("client_get_in_memory", |b| {
        b.iter(|| {
            let response = client.get(&request).unwrap();
            black_box(response);
        });
    });
}

criterion_group!(benches, bench_request_encoder, bench_response_decoder, bench_client_round_trip);
criterion_main!(benches);

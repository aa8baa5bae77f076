use std::hint::black_box;
use std::io::Read;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use textcodec::{DecoderExt, DecodingReader, Translator, new_decoder};

const SAMPLE: &str = "Résumé これは漢字です。 ελληνικά русский 𝄞 ";

fn sample_in(charset: &str, repeat: usize) -> Vec<u8> {
    let mut translator = Translator::for_names("UTF-8", charset).expect("known charset");
    translator.convert(SAMPLE.repeat(repeat).as_bytes())
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for charset in ["UTF-8", "UTF-16LE", "Shift_JIS", "windows-1252"] {
        let input = sample_in(charset, 1024);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(charset), &input, |b, input| {
            b.iter(|| new_decoder(charset).expect("known charset").convert_string(black_box(input)))
        });
    }
    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let input = sample_in("Shift_JIS", 1024);
    let mut group = c.benchmark_group("translate");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("Shift_JIS to UTF-16BE", |b| {
        b.iter(|| {
            Translator::for_names("Shift_JIS", "UTF-16BE")
                .expect("known charsets")
                .convert(black_box(&input))
        })
    });
    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let input = sample_in("EUC-JP", 1024);
    let mut group = c.benchmark_group("reader");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for capacity in [64, 4096, textcodec::DEFAULT_BUFFER_SIZE] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            b.iter(|| {
                let decoder = new_decoder("EUC-JP").expect("known charset");
                let source = black_box(input.as_slice());
                let mut reader = DecodingReader::with_capacity(capacity, source, decoder);
                let mut text = String::new();
                reader.read_to_string(&mut text).expect("in-memory read");
                text
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_translate, bench_reader);
criterion_main!(benches);

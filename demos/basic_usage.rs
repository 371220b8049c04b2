//! Basic usage example for fixint
//!
//! Run with: cargo run --example basic_usage

use fixint::bench;
use fixint::contracts::{provider_for, ByteConverter};
use fixint::convert::{self, from_bytes, get_bytes, stream_read, stream_write};
use fixint::stream::{wrap_read, wrap_write};
use fixint::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    println!("fixint Basic Usage Example");
    println!("==========================");

    // Example 1: byte windows
    println!("\n1. Byte Windows:");
    {
        let value = Int16::new(-100);
        let window = get_bytes(&value);
        println!("  {} -> {:02x?}", value, window.as_slice());

        let decoded: Int16 = from_bytes(&window)?;
        println!("  {:02x?} -> {}", window.as_slice(), decoded);

        match from_bytes::<Int16>(&[]) {
            Err(e) => println!("  empty window rejected: {}", e),
            Ok(v) => println!("  unexpected value {}", v),
        }
    }

    // Example 2: provider lookup
    println!("\n2. Provider Lookup:");
    {
        let converter = provider_for::<dyn ByteConverter<UInt64>, UInt64>();
        println!("  UInt64 byte length: {}", converter.byte_len());
        println!("  Int128 byte length: {}", convert::byte_len::<Int128>());
    }

    // Example 3: typed streaming over a growable buffer
    println!("\n3. Streaming:");
    {
        let mut buf = Vec::new();
        let mut writer = wrap_write(Some(&mut buf))?;
        stream_write(&mut writer, &Int16::new(-100))?;
        stream_write(&mut writer, &UInt32::new(0xdead_beef))?;
        stream_write(&mut writer, &Int64::MIN)?;
        println!("  wrote {} bytes: {:02x?}", buf.len(), buf);

        let mut reader = wrap_read(Some(&buf[..]))?;
        let a = stream_read::<Int16, _>(&mut reader)?;
        let b = stream_read::<UInt32, _>(&mut reader)?;
        println!("  read {} and {:#x}, cursor at {}", a, b.get(), reader.position());

        match stream_read::<Int128, _>(&mut reader) {
            Err(e) => println!("  oversized read rejected ({}), cursor still at {}", e, reader.position()),
            Ok(v) => println!("  unexpected value {}", v),
        }
        let c = stream_read::<Int64, _>(&mut reader)?;
        println!("  read {}", c);
    }

    // Example 4: wrapping arithmetic and parsing
    println!("\n4. Arithmetic and Parsing:");
    {
        println!("  {} * {} = {}", Int16::MAX, Int16::MAX, Int16::MAX * Int16::MAX);
        println!("  {} + 1 = {}", Int8::MAX, Int8::MAX + Int8::ONE);
        println!("  1 / 0 -> {:?}", Int32::ONE.try_div(Int32::ZERO));
        println!("  parse \"-100\" -> {:?}", "-100".parse::<Int16>());
        println!("  parse \"99999\" -> {:?}", "99999".parse::<Int16>());
        println!("  {} as f64 = {}", UInt64::MAX, UInt64::MAX.to_f64());
    }

    // Example 5: reproducible random values
    println!("\n5. Random Values:");
    {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..3 {
            let dice: UInt8 =
                convert::next_random(&mut rng, Some(UInt8::new(1)..=UInt8::new(6)))?;
            let any: Int32 = convert::next_random(&mut rng, None)?;
            println!("  dice={} any={}", dice, any);
        }
    }

    // Example 6: timing the engine against raw primitives
    println!("\n6. Timing:");
    {
        let value = Int64::new(-123_456_789);
        let comparison = bench::compare(
            100_000,
            || {
                std::hint::black_box(value.get().to_le_bytes());
            },
            || {
                std::hint::black_box(get_bytes(&value));
            },
        );
        println!("  raw to_le_bytes: {}", comparison.first);
        println!("  engine get_bytes: {}", comparison.second);
        if let Some(ratio) = comparison.ratio() {
            println!("  ratio: {:.2}", ratio);
        }
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}

use bit_string::{BitString, BitStringError, reference};
use bytemuck_derive::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Header {
    tag: u16,
    flags: u16,
}

fn main() {
    println!("=== Bit String Examples ===\n");

    // Example 1: Variable-width fields
    let _ = example_fields();

    // Example 2: Editing through references
    example_references();

    // Example 3: Inline vs heap storage
    example_storage();

    // Example 4: Raw bytes and digests
    example_bytes();
}

fn example_fields() -> Result<(), BitStringError> {
    println!("Example 1: Packing variable-width fields");

    let mut packet = BitString::new();
    packet.append_uint(0b101u8, 3)?; // version
    packet.append_uint(12u16, 5)?; // kind
    packet.append_uint(1000u32, 10)?; // payload length

    println!("  Bits:    {}", packet);
    println!("  Length:  {} bits", packet.len());
    println!("  Version: {}", packet.substr(0, 3)?.to_u8()?);
    println!("  Kind:    {}", packet.substr(3, 5)?.to_u8()?);
    println!("  Payload: {}", packet.substr(8, 10)?.to_u16()?);

    match packet.to_u8() {
        Ok(v) => println!("  As u8:   {}", v),
        Err(e) => println!("  As u8:   {}", e),
    }
    println!();

    Ok(())
}

fn example_references() {
    println!("Example 2: Editing through references");

    let mut bits: BitString = "110000".parse().unwrap();
    println!("  Before:  {}", bits);

    {
        let mut it = bits.iter_mut();
        let first = it.next().unwrap();
        let last = it.next_back().unwrap();
        reference::swap(&first, &last);
    }
    for bit in bits.iter_mut().skip(2).step_by(2) {
        bit.toggle();
    }

    println!("  After:   {}", bits);
    println!();
}

fn example_storage() {
    println!("Example 3: Inline vs heap storage");

    let mut bits = BitString::new();
    for i in 0..64 {
        bits.push(i % 3 == 0);
    }
    println!("  64 bits:  inline = {}, capacity = {}", bits.is_inline(), bits.capacity());

    bits.push(true);
    println!("  65 bits:  inline = {}, capacity = {}", bits.is_inline(), bits.capacity());

    bits.pop_back(33);
    bits.shrink_to_fit();
    println!("  32 bits:  inline = {}, capacity = {}", bits.is_inline(), bits.capacity());
    println!();
}

fn example_bytes() {
    println!("Example 4: Raw bytes and digests");

    let header = Header {
        tag: 0xBEEF,
        flags: 0x0001,
    };
    let mut bits = BitString::from_pod(&header);
    bits.append_text("101").unwrap();

    println!("  Length:  {} bits", bits.len());
    println!("  Bytes:   {:02x?}", bits.as_raw_bytes());
    println!("  Digest:  {}", bits.digest());
    println!();
}

use evgasm_core::{
    bytes::Bytes,
    error::Error,
    utils::{deposit, sextract, zextract},
};

#[test]
fn extract() {
    assert_eq!(zextract::<u32, u32>(0x8000_0000, 31, 1), 1);
    assert_eq!(zextract::<u32, u32>(0x0fc0_0000, 22, 8), 0x3f);
    assert_eq!(zextract::<u32, u32>(0xffff_ffff, 0, 32), 0xffff_ffff);
    assert_eq!(sextract::<i32, u32>(0x1f, 0, 5), -1);
    assert_eq!(sextract::<i32, u32>(0x0f, 0, 5), 15);
}

#[test]
fn insert() {
    assert_eq!(deposit(0u32, 22, 8, 0x53u32), 0x53 << 22);
    assert_eq!(deposit(0xffff_ffffu32, 21, 1, 0u32), 0xffdf_ffff);
    assert_eq!(deposit(0u32, 0, 32, 0x1234_5678u32), 0x1234_5678);
    assert_eq!(deposit(0u32, 0, 5, 0xffff_ffffu32), 0x1f);
}

#[test]
fn read_words() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0xaa];
    let mut bytes = Bytes::at(&data, 0);
    assert_eq!(bytes.read_words::<2>(), Ok([0x0403_0201, 0x0807_0605]));
    assert_eq!(bytes.offset(), 8);
    assert_eq!(bytes.remaining(), 1);
    assert_eq!(bytes.read_u32(), Err(Error::More(12 * 8)));

    let mut bytes = Bytes::at(&data, 4);
    assert_eq!(bytes.read_u32(), Ok(0x0807_0605));
}

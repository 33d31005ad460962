#![no_main]
use libfuzzer_sys::fuzz_target;
use strtoolkit_core::{ByteString, strcpy, streq, strlen, strlwr, strneq, strrev, strupr};

fuzz_target!(|data: &[u8]| {
    // Ensure a terminated buffer for the fixed-buffer routines.
    let mut buf = data.to_vec();
    if buf.last() != Some(&0) {
        buf.push(0);
    }
    let len = strlen(&buf);

    // Copy into an exactly-sized destination and compare.
    let mut dest = vec![0xAAu8; len + 1];
    strcpy(&mut dest, &buf);
    assert!(streq(&dest, &buf));
    assert!(strneq(&dest, &buf, len + 7));
    assert_eq!(strlen(&dest), len);

    // Reverse twice is the identity on logical content.
    strrev(&mut dest);
    assert_eq!(strlen(&dest), len);
    strrev(&mut dest);
    assert!(streq(&dest, &buf));

    // Case conversion preserves length and is idempotent.
    strupr(&mut dest);
    assert_eq!(strlen(&dest), len);
    let upper = dest.clone();
    strupr(&mut dest);
    assert!(streq(&dest, &upper));
    strlwr(&mut dest);
    assert_eq!(strlen(&dest), len);

    // Growable representation agrees with the fixed one.
    let grow = ByteString::from_bytes(&buf[..len]);
    assert_eq!(grow.len(), len);
    let mut copy = ByteString::new();
    copy.assign(&grow);
    assert_eq!(copy, grow);
    copy.append(&grow);
    assert_eq!(copy.len(), len * 2);
});

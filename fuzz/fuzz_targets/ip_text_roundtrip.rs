#![no_main]

use libfuzzer_sys::fuzz_target;
use spark_ip::{IpAddress, IpError, text};

// 任意 UTF-8 输入要么被拒绝并原样回传，要么解析成功且规范文本可以再次解析回同一地址。
fuzz_target!(|input: &str| {
    match text::parse_ip(input) {
        Ok(address) => {
            let canonical = address.to_string();
            let reparsed: IpAddress = canonical
                .parse()
                .expect("canonical text must parse back");
            assert_eq!(reparsed, address);
            assert_eq!(reparsed.to_string(), canonical);
        }
        Err(IpError::MalformedAddress { input: echoed }) => assert_eq!(echoed, input),
        Err(other) => panic!("unexpected error kind: {other:?}"),
    }
});

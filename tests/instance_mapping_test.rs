//! 服务记录 → Eureka 实例 映射测试

use flare_eureka_adapter::eureka::instance::{
    Instance, PROTOCOL_METADATA_KEY, PROTOCOL_METADATA_VALUE, Port, build_metadata,
};
use flare_eureka_adapter::ServiceRecord;
use serde_json::json;

fn web_record() -> ServiceRecord {
    ServiceRecord::new("web", "web:1", "10.0.0.5", 8080).with_tag("version|1.2")
}

/// 测试：id 中的 `:` 全部替换为 `-`，其它字符保持不变
#[test]
fn test_id_colons_replaced() {
    let record = ServiceRecord::new("web", "host-a:web:8080:tcp", "10.0.0.5", 8080);
    let instance = Instance::from_service(&record);
    assert_eq!(instance.id, "host-a-web-8080-tcp");

    let record = ServiceRecord::new("web", "plain_id.v2", "10.0.0.5", 8080);
    assert_eq!(Instance::from_service(&record).id, "plain_id.v2");
}

/// 测试：hostName、app、ipAddr、端口字段
#[test]
fn test_basic_fields() {
    let instance = Instance::from_service(&web_record());

    assert_eq!(instance.hostname, "web");
    assert_eq!(instance.app, "web");
    assert_eq!(instance.ip_address, "10.0.0.5");
    assert_eq!(instance.port, Port { port: 8080, enabled: true });
    assert_eq!(instance.secure_port, Port { port: 0, enabled: false });
}

/// 测试：没有标签时只有协议提示
#[test]
fn test_seed_metadata_without_tags() {
    let record = ServiceRecord::new("web", "web:1", "10.0.0.5", 8080);
    let instance = Instance::from_service(&record);

    assert_eq!(instance.metadata.len(), 1);
    assert_eq!(
        instance.metadata.get(PROTOCOL_METADATA_KEY).map(String::as_str),
        Some(PROTOCOL_METADATA_VALUE)
    );
}

/// 测试：标签解析
#[test]
fn test_tag_parsing() {
    let metadata = build_metadata(&["env|prod", "debug", "route|a|b", "empty|"]);

    assert_eq!(metadata.get("env").map(String::as_str), Some("prod"));
    assert_eq!(metadata.get("debug").map(String::as_str), Some(""));
    assert_eq!(metadata.get("route").map(String::as_str), Some("a|b"));
    assert_eq!(metadata.get("empty").map(String::as_str), Some(""));
    assert_eq!(metadata.get("istio.protocol").map(String::as_str), Some("http"));
    assert_eq!(metadata.len(), 5);
}

/// 测试：标签可以覆盖注入的协议提示
#[test]
fn test_tag_overrides_protocol_seed() {
    let record = ServiceRecord::new("grpc-api", "api:1", "10.0.0.6", 9090)
        .with_tag("istio.protocol|grpc");
    let instance = Instance::from_service(&record);

    assert_eq!(instance.metadata.get("istio.protocol").map(String::as_str), Some("grpc"));
    assert_eq!(instance.metadata.len(), 1);
}

/// 测试：重复的键以最后一个标签为准
#[test]
fn test_duplicate_tags_last_wins() {
    let record = ServiceRecord::new("web", "web:1", "10.0.0.5", 8080)
        .with_tags(["env|staging", "env|prod", "env"]);
    let instance = Instance::from_service(&record);

    assert_eq!(instance.metadata.get("env").map(String::as_str), Some(""));
}

/// 测试：相同输入总是得到相同实例
#[test]
fn test_mapping_is_deterministic() {
    let record = web_record().with_tags(["zone|a", "canary"]);
    let first = Instance::from_service(&record);
    let second = Instance::from(&record);

    assert_eq!(first, second);
    assert_eq!(record, web_record().with_tags(["zone|a", "canary"]));
}

/// 测试：线上 JSON 格式（端口字段为字符串）
#[test]
fn test_wire_format() {
    let instance = Instance::from_service(&web_record());
    let value = serde_json::to_value(&instance).expect("Failed to encode instance");

    assert_eq!(
        value,
        json!({
            "instanceId": "web-1",
            "hostName": "web",
            "app": "web",
            "ipAddr": "10.0.0.5",
            "port": { "$": "8080", "@enabled": "true" },
            "securePort": { "$": "0", "@enabled": "false" },
            "metadata": { "istio.protocol": "http", "version": "1.2" }
        })
    );
}

/// 测试：空的 instanceId 与空元数据不输出
#[test]
fn test_empty_fields_omitted() {
    let mut instance = Instance::from_service(&ServiceRecord::new("web", "", "10.0.0.5", 80));
    instance.metadata.clear();
    let value = serde_json::to_value(&instance).expect("Failed to encode instance");

    assert!(value.get("instanceId").is_none());
    assert!(value.get("metadata").is_none());
    assert_eq!(value["port"]["$"], "80");
}

/// 测试：能读回注册中心返回的字符串端口
#[test]
fn test_decode_registry_instance() {
    let raw = r#"{
        "instanceId": "web-1",
        "hostName": "web",
        "app": "WEB",
        "ipAddr": "10.0.0.5",
        "port": { "$": "8080", "@enabled": "true" },
        "securePort": { "$": "443", "@enabled": "false" },
        "metadata": { "istio.protocol": "http" }
    }"#;
    let instance: Instance = serde_json::from_str(raw).expect("Failed to decode instance");

    assert_eq!(instance.port, Port::enabled(8080));
    assert_eq!(instance.secure_port, Port { port: 443, enabled: false });
    assert_eq!(instance.app, "WEB");

    let bad = raw.replace(r#""$": "8080""#, r#""$": "http""#);
    assert!(serde_json::from_str::<Instance>(&bad).is_err());
}

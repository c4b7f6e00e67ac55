use raml2ts::generator::{render_client_from_api, ClientConfig};
use raml2ts::spec::{load_spec, parse_spec};

fn render_fixture() -> String {
    let spec = load_spec("tests/fixtures/chatwork.raml").unwrap();
    render_client_from_api(&spec, &ClientConfig::default()).unwrap()
}

#[test]
fn test_preamble() {
    let out = render_fixture();
    assert!(out.contains("export const CHATWORK_URL = \"https://api.chatwork.com/v2\";"));
    assert!(out.contains("export type RateLimits"));
    assert!(out.contains("\"x-ratelimit-remaining\": number;"));
    assert!(out.contains("export default class ChatworkApi {"));
    assert!(out.contains("private async postFile<T = any>"));
    assert!(out.contains("Chatwork API v2"));
}

#[test]
fn test_item_endpoint_signature_and_response() {
    let out = render_fixture();
    assert!(out
        .contains("async getRoomsMessagesInfo(room_id: string | number, message_id: string | number)"));
    assert!(out.contains(
        "return await this.get<GetRoomsMessagesInfoResponse>(`/rooms/${room_id}/messages/${message_id}`);"
    ));
    assert!(out.contains("export interface GetRoomsMessagesInfoResponse {"));
    assert!(out.contains("message_id: string;"));
}

#[test]
fn test_post_rooms_param_interface() {
    let out = render_fixture();
    assert!(out.contains("async postRooms(params: PostRoomsParam)"));
    assert!(out.contains("export interface PostRoomsParam {"));
    assert!(out.contains("  name: string;"));
    assert!(out.contains("  description?: string;"));
    assert!(out.contains("  icon_preset?: 'group'|'check'|'document';"));
}

#[test]
fn test_boolean_param_emitted_as_literal_union() {
    let out = render_fixture();
    assert!(out.contains("  force?: 0|1;"));
    assert!(!out.contains("force?: boolean"));
}

#[test]
fn test_optional_param_object_marker() {
    let out = render_fixture();
    // every declared parameter of GET /my/tasks is optional
    assert!(out.contains("async getMyTasks(params?: GetMyTasksParam)"));
    // required enum parameter keeps the object required
    assert!(out.contains("async deleteRoomsInfo(room_id: string | number, params: DeleteRoomsInfoParam)"));
}

#[test]
fn test_typeless_endpoint_untyped_return() {
    let out = render_fixture();
    assert!(out.contains("return await this.delete(`/rooms/${room_id}`, params);"));
}

#[test]
fn test_trait_fallback_response_type() {
    let out = render_fixture();
    assert!(out.contains("async putRoomsMessagesRead(room_id: string | number)"));
    assert!(out
        .contains("return await this.put<PutRoomsMessagesReadResponse>(`/rooms/${room_id}/messages/read`);"));
    assert!(out.contains("export interface PutRoomsMessagesReadResponse {"));
    assert!(out.contains("unread_num: number;"));
}

#[test]
fn test_file_upload_method() {
    let out = render_fixture();
    assert!(out.contains("async postRoomsFiles(room_id: string | number, params: PostRoomsFilesParam)"));
    assert!(out.contains("return await this.postFile<PostRoomsFilesResponse>(`/rooms/${room_id}/files`, params);"));
    assert!(out.contains("  file: Buffer;"));
    assert!(out.contains("  file_name?: string;"));
}

#[test]
fn test_array_response_alias() {
    let out = render_fixture();
    assert!(out.contains("export type GetRoomsResponse = GetRoomsResponseItem[];"));
    assert!(out.contains("export interface GetRoomsResponseItem {"));
}

#[test]
fn test_nested_object_interface() {
    let out = render_fixture();
    assert!(out.contains("account: GetMeResponseAccount;"));
    assert!(out.contains("export interface GetMeResponseAccount {"));
    assert!(out.contains("avatar_image_url: string;"));
}

#[test]
fn test_methods_emitted_in_extraction_order() {
    let out = render_fixture();
    let nested = out.find("async getRoomsMessagesInfo").unwrap();
    let item = out.find("async getRoomsInfo").unwrap();
    let collection = out.find("async getRooms(").unwrap();
    assert!(nested < item);
    assert!(item < collection);
}

#[test]
fn test_name_collision_is_fatal() {
    let spec = parse_spec(
        r#"
"/rooms":
  GET: {}
"/{tenant}":
  "/rooms":
    GET: {}
"#,
    )
    .unwrap();
    let err = render_client_from_api(&spec, &ClientConfig::default());
    assert!(err.is_err());
}

#[test]
fn test_config_overrides_constants() {
    let spec = parse_spec("title: Sample\nversion: v1\n\"/ping\":\n  GET: {}\n").unwrap();
    let config = ClientConfig {
        base_url: "https://api.example.com/v1".to_string(),
        class_name: "SampleApi".to_string(),
        token_header: "X-Api-Key".to_string(),
        token_env: "SAMPLE_API_TOKEN".to_string(),
    };
    let out = render_client_from_api(&spec, &config).unwrap();
    assert!(out.contains("export const CHATWORK_URL = \"https://api.example.com/v1\";"));
    assert!(out.contains("export default class SampleApi {"));
    assert!(out.contains("if (!headers[\"X-Api-Key\"])"));
    assert!(out.contains("process?.env?.SAMPLE_API_TOKEN"));
}

#[test]
fn test_config_auto_detected_beside_spec() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("api.raml");
    std::fs::write(&spec_path, "\"/ping\":\n  GET: {}\n").unwrap();
    std::fs::write(
        dir.path().join("raml2ts.yaml"),
        "class_name: PingApi\n",
    )
    .unwrap();
    let config = ClientConfig::load(None, &spec_path).unwrap();
    assert_eq!(config.class_name, "PingApi");
    // unset keys keep their defaults
    assert_eq!(config.token_header, "X-ChatWorkToken");
}

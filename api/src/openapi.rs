//! OpenAPI 3 description of the service, served at `/api-docs/openapi.json`.

use serde_json::{json, Value};

pub const API_TITLE: &str = "聯絡人管理系統 API";
pub const API_VERSION: &str = "1.0.0";

fn error_responses(codes: &[(&str, &str)]) -> Value {
    let mut responses = serde_json::Map::new();
    for (code, description) in codes {
        responses.insert(
            code.to_string(),
            json!({
                "description": description,
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
            }),
        );
    }
    Value::Object(responses)
}

fn with_success(mut responses: Value, code: &str, description: &str, schema: Option<Value>) -> Value {
    let mut success = json!({ "description": description });
    if let Some(schema) = schema {
        success["content"] = json!({ "application/json": { "schema": schema } });
    }
    responses[code] = success;
    responses
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn array_of(name: &str) -> Value {
    json!({ "type": "array", "items": schema_ref(name) })
}

fn path_param(name: &str, schema: Value, description: &str) -> Value {
    json!({
        "name": name,
        "in": "path",
        "required": true,
        "description": description,
        "schema": schema
    })
}

fn json_body(name: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema_ref(name) } }
    })
}

/// The API document, advertising `server_url` as the server
pub fn api_document(server_url: &str) -> Value {
    let contact_id = path_param("id", json!({ "type": "integer", "format": "int64", "minimum": 1 }), "Contact id");

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": "聯絡人管理系統，所有新增、修改與刪除操作都會自動寫入稽核紀錄。\nContact management with automatic audit logging of every create, update and delete.",
            "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" }
        },
        "servers": [{ "url": server_url, "description": "Local server" }],
        "tags": [
            { "name": "contacts", "description": "聯絡人管理 | Contact management" },
            { "name": "audit-logs", "description": "稽核紀錄查詢 | Audit trail queries" }
        ],
        "paths": {
            "/api/contacts": {
                "get": {
                    "tags": ["contacts"],
                    "summary": "List every contact",
                    "operationId": "getAllContacts",
                    "responses": with_success(json!({}), "200", "All contacts", Some(array_of("ContactResponse")))
                },
                "post": {
                    "tags": ["contacts"],
                    "summary": "Create a contact",
                    "operationId": "createContact",
                    "requestBody": json_body("CreateContactRequest"),
                    "responses": with_success(
                        error_responses(&[("400", "Invalid input"), ("500", "Audit or storage failure")]),
                        "201", "Contact created", Some(schema_ref("ContactResponse"))
                    )
                }
            },
            "/api/contacts/{id}": {
                "get": {
                    "tags": ["contacts"],
                    "summary": "Fetch one contact",
                    "operationId": "getContact",
                    "parameters": [contact_id.clone()],
                    "responses": with_success(
                        error_responses(&[("400", "Invalid id"), ("404", "No such contact")]),
                        "200", "The contact", Some(schema_ref("ContactResponse"))
                    )
                },
                "put": {
                    "tags": ["contacts"],
                    "summary": "Replace a contact's details",
                    "operationId": "updateContact",
                    "parameters": [contact_id.clone()],
                    "requestBody": json_body("UpdateContactRequest"),
                    "responses": with_success(
                        error_responses(&[
                            ("400", "Invalid id or input"),
                            ("404", "No such contact"),
                            ("500", "Audit or storage failure")
                        ]),
                        "200", "Contact updated", Some(schema_ref("ContactResponse"))
                    )
                },
                "delete": {
                    "tags": ["contacts"],
                    "summary": "Delete a contact, keeping its audit history",
                    "operationId": "deleteContact",
                    "parameters": [contact_id],
                    "responses": with_success(
                        error_responses(&[
                            ("400", "Invalid id"),
                            ("404", "No such contact"),
                            ("500", "Audit or storage failure")
                        ]),
                        "204", "Contact deleted", None
                    )
                }
            },
            "/api/audit-logs": {
                "get": {
                    "tags": ["audit-logs"],
                    "summary": "The whole audit trail, newest first",
                    "operationId": "getAllAuditLogs",
                    "responses": with_success(json!({}), "200", "All audit entries", Some(array_of("AuditLogResponse")))
                }
            },
            "/api/audit-logs/contact/{contactId}": {
                "get": {
                    "tags": ["audit-logs"],
                    "summary": "History of one contact, newest first",
                    "operationId": "getAuditLogsByContact",
                    "parameters": [path_param("contactId", json!({ "type": "integer", "format": "int64" }), "Contact id")],
                    "responses": with_success(
                        error_responses(&[("400", "Contact id is not a number")]),
                        "200", "Entries for the contact", Some(array_of("AuditLogResponse"))
                    )
                }
            },
            "/api/audit-logs/operation/{operationType}": {
                "get": {
                    "tags": ["audit-logs"],
                    "summary": "Entries of one operation type, newest first",
                    "operationId": "getAuditLogsByOperation",
                    "parameters": [path_param("operationType", schema_ref("OperationType"), "Operation type")],
                    "responses": with_success(
                        error_responses(&[("400", "Unknown operation type")]),
                        "200", "Entries of the operation type", Some(array_of("AuditLogResponse"))
                    )
                }
            }
        },
        "components": { "schemas": schemas() }
    })
}

fn schemas() -> Value {
    json!({
        "CreateContactRequest": {
            "type": "object",
            "required": ["name", "phone"],
            "properties": {
                "name": { "type": "string", "maxLength": 50, "example": "張三" },
                "phone": { "type": "string", "maxLength": 20, "example": "0912345678" },
                "address": { "type": "string", "maxLength": 200, "nullable": true, "example": "台北市信義區信義路五段7號" }
            }
        },
        "UpdateContactRequest": {
            "type": "object",
            "required": ["name", "phone"],
            "properties": {
                "name": { "type": "string", "maxLength": 50 },
                "phone": { "type": "string", "maxLength": 20 },
                "address": { "type": "string", "maxLength": 200, "nullable": true }
            }
        },
        "ContactResponse": {
            "type": "object",
            "required": ["id", "name", "phone", "createdAt", "updatedAt"],
            "properties": {
                "id": { "type": "integer", "format": "int64" },
                "name": { "type": "string" },
                "phone": { "type": "string" },
                "address": { "type": "string", "nullable": true },
                "createdAt": { "type": "string", "format": "date-time" },
                "updatedAt": { "type": "string", "format": "date-time" }
            }
        },
        "OperationType": {
            "type": "string",
            "enum": ["CREATE", "READ", "UPDATE", "DELETE"]
        },
        "AuditLogResponse": {
            "type": "object",
            "required": ["id", "contactId", "operationTime", "operationType"],
            "properties": {
                "id": { "type": "integer", "format": "int64" },
                "contactId": { "type": "integer", "format": "int64" },
                "operationTime": { "type": "string", "format": "date-time" },
                "operationType": schema_ref("OperationType"),
                "beforeData": { "type": "string", "nullable": true, "description": "Contact before the operation, as JSON" },
                "afterData": { "type": "string", "nullable": true, "description": "Contact after the operation, as JSON" }
            }
        },
        "FieldError": {
            "type": "object",
            "required": ["field", "message"],
            "properties": {
                "field": { "type": "string" },
                "message": { "type": "string" }
            }
        },
        "ErrorResponse": {
            "type": "object",
            "required": ["status", "error", "message", "timestamp", "path"],
            "properties": {
                "status": { "type": "integer" },
                "error": { "type": "string" },
                "message": { "type": "string" },
                "timestamp": { "type": "string", "format": "date-time" },
                "path": { "type": "string" },
                "validationErrors": { "type": "array", "items": schema_ref("FieldError") }
            }
        }
    })
}

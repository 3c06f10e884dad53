//! Application State
//!
//! 显式持有所有存储与 Command/Query Handlers，随 HttpServer 注入路由

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateItemHandler, CreateStudentHandler, DeleteStudentHandler, UpdateStudentHandler,
    // Query handlers
    GetItemByNameHandler, GetItemHandler,
    // Ports
    ClientRegistryPort, ItemStorePort, StudentStorePort,
};
use crate::config::CreateResponseMode;
use crate::infrastructure::memory::{
    InMemoryClientRegistry, InMemoryItemStore, InMemoryStudentStore,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub item_store: Arc<dyn ItemStorePort>,
    pub student_store: Arc<dyn StudentStorePort>,
    pub client_registry: Arc<dyn ClientRegistryPort>,

    /// `POST /items` 的响应形式
    pub create_response: CreateResponseMode,

    // ========== Command Handlers ==========
    pub create_item_handler: CreateItemHandler,
    pub create_student_handler: CreateStudentHandler,
    pub update_student_handler: UpdateStudentHandler,
    pub delete_student_handler: DeleteStudentHandler,

    // ========== Query Handlers ==========
    pub get_item_handler: GetItemHandler,
    pub get_item_by_name_handler: GetItemByNameHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        item_store: Arc<dyn ItemStorePort>,
        student_store: Arc<dyn StudentStorePort>,
        client_registry: Arc<dyn ClientRegistryPort>,
        create_response: CreateResponseMode,
    ) -> Self {
        Self {
            // Ports
            item_store: item_store.clone(),
            student_store: student_store.clone(),
            client_registry,
            create_response,

            // Command handlers
            create_item_handler: CreateItemHandler::new(item_store.clone()),
            create_student_handler: CreateStudentHandler::new(student_store.clone()),
            update_student_handler: UpdateStudentHandler::new(student_store.clone()),
            delete_student_handler: DeleteStudentHandler::new(student_store),

            // Query handlers
            get_item_handler: GetItemHandler::new(item_store.clone()),
            get_item_by_name_handler: GetItemByNameHandler::new(item_store),
        }
    }

    /// 使用进程内存储创建应用状态
    pub fn in_memory(create_response: CreateResponseMode) -> Self {
        Self::new(
            InMemoryItemStore::new().arc(),
            InMemoryStudentStore::new().arc(),
            InMemoryClientRegistry::new().arc(),
            create_response,
        )
    }
}

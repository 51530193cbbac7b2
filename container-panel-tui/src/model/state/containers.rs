//! 容器页面状态

use chrono::TimeZone;
use chrono::Utc;
use container_panel_core::filter::{filter_rows, RowText};
use container_panel_core::types::{Container, ContainerStatus};

/// 容器页面状态
///
/// `containers` 是页面进入时捕获的行列表，过滤只在这份列表上
/// 重新计算可见性；`visible` 是当前可见行在 `containers` 中的索引。
#[derive(Debug, Default)]
pub struct ContainersState {
    /// 容器行列表（捕获快照）
    pub containers: Vec<Container>,
    /// 可见行索引（按行顺序）
    pub visible: Vec<usize>,
    /// 当前选中项（`visible` 中的索引）
    pub selected: usize,
    /// 过滤查询文本
    pub filter_query: String,
    /// 过滤输入是否处于激活状态
    pub filter_active: bool,
}

impl ContainersState {
    /// 创建新的容器状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置容器列表（捕获行快照，重置过滤与选中）
    pub fn set_containers(&mut self, containers: Vec<Container>) {
        self.containers = containers;
        self.filter_query.clear();
        self.filter_active = false;
        self.selected = 0;
        self.visible = (0..self.containers.len()).collect();
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.visible.is_empty() && self.selected < self.visible.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.selected = self.visible.len() - 1;
        }
    }

    /// 获取当前选中的容器
    pub fn selected_container(&self) -> Option<&Container> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.containers.get(i))
    }

    /// 重新计算可见行（每次查询编辑后调用）
    ///
    /// 单元格文本在计算时从当前容器数据读取，行的成员关系
    /// 始终是捕获时的那份列表。
    pub fn apply_filter(&mut self) {
        let rows: Vec<RowText> = self
            .containers
            .iter()
            .map(RowText::from_container)
            .collect();
        self.visible = filter_rows(&self.filter_query, &rows);

        // 可见集合收缩时收拢选中项
        if self.visible.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.visible.len() {
            self.selected = self.visible.len() - 1;
        }
    }

    /// 过滤输入一个字符
    pub fn push_filter_char(&mut self, ch: char) {
        self.filter_query.push(ch);
        self.apply_filter();
    }

    /// 过滤删除一个字符
    pub fn pop_filter_char(&mut self) {
        self.filter_query.pop();
        self.apply_filter();
    }

    /// 匹配行数（状态栏显示用）
    pub fn match_count(&self) -> usize {
        self.visible.len()
    }

    /// 按 ID 停止容器，返回是否找到
    pub fn stop_by_id(&mut self, id: &str) -> bool {
        let Some(container) = self.containers.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        container.status = ContainerStatus::Stopped;
        self.apply_filter();
        true
    }

    /// 按 ID 删除容器，返回被删除的容器
    pub fn delete_by_id(&mut self, id: &str) -> Option<Container> {
        let index = self.containers.iter().position(|c| c.id == id)?;
        let removed = self.containers.remove(index);
        self.apply_filter();
        Some(removed)
    }

    /// 添加模拟数据（开发测试用）
    pub fn load_mock_fleet(&mut self) {
        let created = |d: u32, h: u32, m: u32| {
            Utc.with_ymd_and_hms(2026, 7, d, h, m, 0)
                .single()
                .unwrap_or_default()
        };

        self.set_containers(vec![
            Container {
                id: "ctr_1".to_string(),
                user: "alice".to_string(),
                name: "web1".to_string(),
                image: "nginx:1.27".to_string(),
                status: ContainerStatus::Running,
                port: 8080,
                created_at: created(28, 9, 30),
            },
            Container {
                id: "ctr_2".to_string(),
                user: "bob".to_string(),
                name: "db1".to_string(),
                image: "postgres:16".to_string(),
                status: ContainerStatus::Stopped,
                port: 5432,
                created_at: created(29, 14, 5),
            },
            Container {
                id: "ctr_3".to_string(),
                user: "carol".to_string(),
                name: "cache1".to_string(),
                image: "redis:7".to_string(),
                status: ContainerStatus::Running,
                port: 6379,
                created_at: created(30, 8, 45),
            },
            Container {
                id: "ctr_4".to_string(),
                user: "alice".to_string(),
                name: "api1".to_string(),
                image: "python:3.12-slim".to_string(),
                status: ContainerStatus::Error,
                port: 9000,
                created_at: created(31, 18, 20),
            },
        ]);
    }
}

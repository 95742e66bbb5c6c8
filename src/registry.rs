//! 분류별 단위 목록과 변환식 테이블.
//!
//! 프로세스 시작 후 처음 사용될 때 한 번만 구성되며 이후에는 읽기 전용으로 공유된다.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::category::UnitCategory;
use crate::units::Unit;

/// 전역 단위 레지스트리.
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// 전역 레지스트리에 대한 참조를 반환한다.
pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

/// 한 분류의 단위 목록(표시 순서)과 이름 → 변환식 테이블.
#[derive(Debug)]
pub struct CategoryTable {
    pub category: UnitCategory,
    units: Vec<&'static str>,
    functions: HashMap<&'static str, Unit>,
}

impl CategoryTable {
    fn new(category: UnitCategory) -> Self {
        let units = category.units();
        Self {
            category,
            units: units.iter().map(|u| u.name()).collect(),
            functions: units.into_iter().map(|u| (u.name(), u)).collect(),
        }
    }

    /// 표시 순서대로 나열한 단위 이름.
    pub fn units(&self) -> &[&'static str] {
        &self.units
    }

    pub fn function(&self, unit: &str) -> Option<Unit> {
        self.functions.get(unit).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.functions.contains_key(unit)
    }

    /// 목록과 변환식 테이블 중 한쪽에만 존재하는 단위 이름.
    pub fn orphans(&self) -> Vec<&'static str> {
        let mut orphans: Vec<&'static str> = self
            .units
            .iter()
            .filter(|name| !self.functions.contains_key(*name))
            .copied()
            .collect();
        orphans.extend(
            self.functions
                .keys()
                .filter(|name| !self.units.contains(*name))
                .copied(),
        );
        orphans
    }
}

/// 모든 분류 테이블을 담는 레지스트리.
#[derive(Debug)]
pub struct UnitRegistry {
    tables: Vec<CategoryTable>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self {
            tables: UnitCategory::ALL.into_iter().map(CategoryTable::new).collect(),
        }
    }

    /// 표시 순서대로 나열한 분류.
    pub fn categories(&self) -> impl Iterator<Item = UnitCategory> + '_ {
        self.tables.iter().map(|t| t.category)
    }

    pub fn table(&self, category: UnitCategory) -> Option<&CategoryTable> {
        self.tables.iter().find(|t| t.category == category)
    }

    /// 분류 이름으로 테이블을 찾는다.
    pub fn table_by_name(&self, category: &str) -> Option<&CategoryTable> {
        self.tables.iter().find(|t| t.category.name() == category)
    }

    /// (분류, 단위) 이름 쌍에 등록된 변환식을 찾는다.
    pub fn function(&self, category: &str, unit: &str) -> Option<Unit> {
        self.table_by_name(category)?.function(unit)
    }

    /// 목록/테이블 불일치가 있는 (분류, 단위) 쌍을 모두 반환한다.
    pub fn orphans(&self) -> Vec<(UnitCategory, &'static str)> {
        self.tables
            .iter()
            .flat_map(|t| t.orphans().into_iter().map(move |u| (t.category, u)))
            .collect()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

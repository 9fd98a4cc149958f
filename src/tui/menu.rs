use cd2n::model::{ConfigModel, ServiceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Service(ServiceKind),
    Run,
}

impl MenuEntry {
    pub fn all(model: &ConfigModel) -> Vec<Self> {
        model
            .kinds()
            .into_iter()
            .map(MenuEntry::Service)
            .chain(std::iter::once(MenuEntry::Run))
            .collect()
    }

    pub fn title(self) -> String {
        match self {
            MenuEntry::Service(kind) => format!("{} Configure", kind.title()),
            MenuEntry::Run => "Write CD2N Right Now!".to_string(),
        }
    }

    pub fn keybind_hint(self) -> &'static str {
        match self {
            MenuEntry::Service(_) => "Enter edit service",
            MenuEntry::Run => "Enter write docker-compose.yml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_come_before_run() {
        let entries = MenuEntry::all(&ConfigModel::default());
        assert_eq!(
            entries,
            vec![
                MenuEntry::Service(ServiceKind::Justicar),
                MenuEntry::Service(ServiceKind::Chain),
                MenuEntry::Run,
            ]
        );
    }
}

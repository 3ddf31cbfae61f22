use super::auth::UserRole;

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Menus,
    RealizarPedido,
    PedidosPendientes,
    HistorialPedidos,
    GestionDatos,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Menus,
        Page::RealizarPedido,
        Page::PedidosPendientes,
        Page::HistorialPedidos,
        Page::GestionDatos,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Menus => "menus",
            Page::RealizarPedido => "realizar_pedido",
            Page::PedidosPendientes => "pedidos_pendientes",
            Page::HistorialPedidos => "historial_pedidos",
            Page::GestionDatos => "gestion_datos",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Menus => "Menús",
            Page::RealizarPedido => "Realizar Pedido",
            Page::PedidosPendientes => "Pedidos Pendientes",
            Page::HistorialPedidos => "Historial de Pedidos",
            Page::GestionDatos => "Gestión de Datos",
        }
    }

    /// Roles allowed to open the page; `None` means any signed-in user
    pub fn required_roles(&self) -> Option<&'static [UserRole]> {
        use UserRole::*;
        match self {
            Page::Home => None,
            Page::Menus => Some(&[Admin, Coordinador]),
            Page::RealizarPedido => Some(&[Admin, JefeEnfermeria, Coordinador]),
            Page::PedidosPendientes | Page::HistorialPedidos => {
                Some(&[Admin, Coordinador, Auxiliar])
            }
            Page::GestionDatos => Some(&[Admin, JefeEnfermeria]),
        }
    }
}

pub fn can_access(role: UserRole, page: Page) -> bool {
    page.required_roles()
        .map_or(true, |roles| roles.contains(&role))
}

/// Pages shown in the navigation for `role`, in menu order
pub fn visible_pages(role: UserRole) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|p| can_access(role, *p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_table() {
        assert!(can_access(UserRole::Admin, Page::GestionDatos));
        assert!(can_access(UserRole::JefeEnfermeria, Page::RealizarPedido));
        assert!(!can_access(UserRole::JefeEnfermeria, Page::PedidosPendientes));
        assert!(can_access(UserRole::Auxiliar, Page::HistorialPedidos));
        assert!(!can_access(UserRole::Auxiliar, Page::Menus));
        assert!(!can_access(UserRole::Coordinador, Page::GestionDatos));
    }

    #[test]
    fn test_unassigned_only_sees_home() {
        assert_eq!(visible_pages(UserRole::Unassigned), vec![Page::Home]);
        assert_eq!(visible_pages(UserRole::Admin).len(), Page::ALL.len());
    }

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("nope"), None);
    }
}

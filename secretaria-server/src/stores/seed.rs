//! Seed data for first runs with no remote and no cache

use shared::models::{CargoMinisterial, EstadoCivil, Member};
use shared::util::{entity_id, now_iso};

/// Sample members shown until real data is imported or synced
pub fn sample_members() -> Vec<Member> {
    let now = now_iso();
    vec![
        Member {
            id: entity_id(),
            nome_completo: "João da Silva".into(),
            data_nascimento: "1985-03-10".into(),
            idade: shared::models::idade_from("1985-03-10"),
            telefone: "(11) 99999-0001".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
            estado_civil: EstadoCivil::Casado,
            cargo_ministerial: CargoMinisterial::Diacono,
            data_batismo: "2001-07-22".into(),
            data_cadastro: now.clone(),
            data_atualizacao: now.clone(),
            ..Default::default()
        },
        Member {
            id: entity_id(),
            nome_completo: "Maria Oliveira".into(),
            data_nascimento: "1992-11-05".into(),
            idade: shared::models::idade_from("1992-11-05"),
            telefone: "(11) 99999-0002".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
            profissao: "Professora".into(),
            data_batismo: "2010-04-18".into(),
            data_cadastro: now.clone(),
            data_atualizacao: now,
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_members_have_distinct_ids_and_names() {
        let members = sample_members();
        assert_eq!(members.len(), 2);
        assert_ne!(members[0].id, members[1].id);
        assert!(members.iter().all(|m| !m.nome_completo.is_empty()));
        assert!(members.iter().all(|m| m.ativo));
    }
}

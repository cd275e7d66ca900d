//! Church Model

use serde::{Deserialize, Serialize};

/// Postal address, shared by churches and their pastors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endereco {
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

/// Pastor record nested inside a church
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pastor {
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub credencial: String,
    pub endereco: Endereco,
}

/// Church entity, camelCase on the wire
///
/// `classificacao` (Local/Setorial/Central/Regional/Estadual) and `tipo`
/// (Sede/Congregação/Ponto de Pregação) stay free text; the legacy data
/// contains variants outside the nominal vocabularies.
/// `criancas_quantidade` and `dias_funcionamento` are only meaningful when
/// `tem_escola_criancas` is true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Church {
    pub id: String,
    pub classificacao: String,
    pub nome: String,
    pub tipo: String,
    pub endereco: Endereco,
    pub pastor: Pastor,
    pub membros_iniciais: i64,
    pub membros_atuais: i64,
    pub almas_batizadas: i64,
    pub tem_escola_criancas: bool,
    pub criancas_quantidade: i64,
    pub dias_funcionamento: String,
    pub data_cadastro: String,
    pub data_atualizacao: String,
}

impl Church {
    /// Merge a partial update into this church (unset fields keep their value)
    pub fn apply(&mut self, update: ChurchUpdate) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = update.$field { self.$field = v; })*
            };
        }
        merge!(
            classificacao,
            nome,
            tipo,
            endereco,
            pastor,
            membros_iniciais,
            membros_atuais,
            almas_batizadas,
            tem_escola_criancas,
            criancas_quantidade,
            dias_funcionamento,
        );
    }
}

/// Create church payload (no identity, no timestamps)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurchCreate {
    pub classificacao: String,
    pub nome: String,
    pub tipo: String,
    pub endereco: Endereco,
    pub pastor: Pastor,
    pub membros_iniciais: i64,
    pub membros_atuais: i64,
    pub almas_batizadas: i64,
    pub tem_escola_criancas: bool,
    pub criancas_quantidade: i64,
    pub dias_funcionamento: String,
}

/// Update church payload (partial merge; nested objects replace wholesale)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurchUpdate {
    pub classificacao: Option<String>,
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub endereco: Option<Endereco>,
    pub pastor: Option<Pastor>,
    pub membros_iniciais: Option<i64>,
    pub membros_atuais: Option<i64>,
    pub almas_batizadas: Option<i64>,
    pub tem_escola_criancas: Option<bool>,
    pub criancas_quantidade: Option<i64>,
    pub dias_funcionamento: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_nested_objects_wholesale() {
        let mut church = Church {
            nome: "Igreja Central".into(),
            pastor: Pastor {
                nome: "Pr. João".into(),
                telefone: "11 97777-0000".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        church.apply(ChurchUpdate {
            pastor: Some(Pastor {
                nome: "Pr. Marcos".into(),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(church.nome, "Igreja Central");
        assert_eq!(church.pastor.nome, "Pr. Marcos");
        // Nested replace drops the old phone
        assert_eq!(church.pastor.telefone, "");
    }
}

//! Row shapes for the relational backend
//!
//! The backend's columns are snake_case while the application shape is
//! camelCase; these structs are the fixed rename table between the two.
//! Every column is nullable on the wire; missing values are filled with
//! type-appropriate defaults when mapping back (empty string, zero, `true`
//! for the active flag).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use shared::models::{
    CargoMinisterial, Church, ChurchUpdate, Endereco, EstadoCivil, Member, MemberUpdate, Pastor,
};
use shared::util::now_iso;

/// `membros` table row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberRow {
    /// Absent on insert so the backend assigns the identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome_completo: Option<String>,
    pub data_nascimento: Option<String>,
    pub idade: Option<i64>,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub cidade_nascimento: Option<String>,
    pub estado_nascimento: Option<String>,
    pub estado_civil: Option<String>,
    pub profissao: Option<String>,
    pub cargo_ministerial: Option<String>,
    pub data_batismo: Option<String>,
    pub data_ordenacao: Option<String>,
    pub igreja_batismo: Option<String>,
    pub ativo: Option<bool>,
    pub observacoes: Option<String>,
    pub foto: Option<String>,
    pub link_ficha: Option<String>,
    pub link_carteirinha: Option<String>,
    pub data_cadastro: Option<String>,
    pub data_atualizacao: Option<String>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: row.id.unwrap_or_default(),
            nome_completo: row.nome_completo.unwrap_or_default(),
            data_nascimento: row.data_nascimento.unwrap_or_default(),
            idade: row.idade.unwrap_or(0),
            rg: row.rg.unwrap_or_default(),
            cpf: row.cpf.unwrap_or_default(),
            telefone: row.telefone.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            endereco: row.endereco.unwrap_or_default(),
            numero: row.numero.unwrap_or_default(),
            bairro: row.bairro.unwrap_or_default(),
            cidade: row.cidade.unwrap_or_default(),
            estado: row.estado.unwrap_or_default(),
            cep: row.cep.unwrap_or_default(),
            cidade_nascimento: row.cidade_nascimento.unwrap_or_default(),
            estado_nascimento: row.estado_nascimento.unwrap_or_default(),
            estado_civil: row
                .estado_civil
                .map(|s| EstadoCivil::parse(&s))
                .unwrap_or_default(),
            profissao: row.profissao.unwrap_or_default(),
            cargo_ministerial: row
                .cargo_ministerial
                .map(|s| CargoMinisterial::parse(&s))
                .unwrap_or_default(),
            data_batismo: row.data_batismo.unwrap_or_default(),
            data_ordenacao: row.data_ordenacao,
            igreja_batismo: row.igreja_batismo.unwrap_or_default(),
            // Missing active flag means the row predates the column: active
            ativo: row.ativo.unwrap_or(true),
            observacoes: row.observacoes.unwrap_or_default(),
            foto: row.foto.unwrap_or_default(),
            link_ficha: row.link_ficha.unwrap_or_default(),
            link_carteirinha: row.link_carteirinha.unwrap_or_default(),
            data_cadastro: row.data_cadastro.unwrap_or_default(),
            data_atualizacao: row.data_atualizacao.unwrap_or_default(),
        }
    }
}

impl From<&Member> for MemberRow {
    fn from(m: &Member) -> Self {
        MemberRow {
            id: (!m.id.is_empty()).then(|| m.id.clone()),
            nome_completo: Some(m.nome_completo.clone()),
            data_nascimento: Some(m.data_nascimento.clone()),
            idade: Some(m.idade),
            rg: Some(m.rg.clone()),
            cpf: Some(m.cpf.clone()),
            telefone: Some(m.telefone.clone()),
            email: Some(m.email.clone()),
            endereco: Some(m.endereco.clone()),
            numero: Some(m.numero.clone()),
            bairro: Some(m.bairro.clone()),
            cidade: Some(m.cidade.clone()),
            estado: Some(m.estado.clone()),
            cep: Some(m.cep.clone()),
            cidade_nascimento: Some(m.cidade_nascimento.clone()),
            estado_nascimento: Some(m.estado_nascimento.clone()),
            estado_civil: Some(m.estado_civil.as_str().to_string()),
            profissao: Some(m.profissao.clone()),
            cargo_ministerial: Some(m.cargo_ministerial.as_str().to_string()),
            data_batismo: Some(m.data_batismo.clone()),
            data_ordenacao: m.data_ordenacao.clone(),
            igreja_batismo: Some(m.igreja_batismo.clone()),
            ativo: Some(m.ativo),
            observacoes: Some(m.observacoes.clone()),
            foto: Some(m.foto.clone()),
            link_ficha: Some(m.link_ficha.clone()),
            link_carteirinha: Some(m.link_carteirinha.clone()),
            data_cadastro: (!m.data_cadastro.is_empty()).then(|| m.data_cadastro.clone()),
            data_atualizacao: (!m.data_atualizacao.is_empty()).then(|| m.data_atualizacao.clone()),
        }
    }
}

impl MemberRow {
    /// Build an insert row: identity stripped (backend assigns it) and both
    /// timestamps stamped with the client clock.
    ///
    /// Client stamping is kept from the legacy system; under clock skew the
    /// stored timestamps can disagree with the server's notion of time.
    pub fn for_insert(member: &Member) -> Self {
        let now = now_iso();
        let mut row = MemberRow::from(member);
        row.id = None;
        row.data_cadastro = Some(now.clone());
        row.data_atualizacao = Some(now);
        row
    }
}

/// Map only the supplied fields of a partial update to their columns,
/// plus a fresh `data_atualizacao` stamp.
pub fn member_update_columns(update: &MemberUpdate) -> Map<String, Value> {
    let mut cols = Map::new();
    macro_rules! col {
        ($field:ident) => {
            if let Some(v) = &update.$field {
                cols.insert(stringify!($field).to_string(), json!(v));
            }
        };
    }
    col!(nome_completo);
    col!(data_nascimento);
    col!(idade);
    col!(rg);
    col!(cpf);
    col!(telefone);
    col!(email);
    col!(endereco);
    col!(numero);
    col!(bairro);
    col!(cidade);
    col!(estado);
    col!(cep);
    col!(cidade_nascimento);
    col!(estado_nascimento);
    col!(profissao);
    col!(data_batismo);
    col!(data_ordenacao);
    col!(igreja_batismo);
    col!(ativo);
    col!(observacoes);
    col!(foto);
    col!(link_ficha);
    col!(link_carteirinha);
    if let Some(v) = update.estado_civil {
        cols.insert("estado_civil".to_string(), json!(v.as_str()));
    }
    if let Some(v) = update.cargo_ministerial {
        cols.insert("cargo_ministerial".to_string(), json!(v.as_str()));
    }
    cols.insert("data_atualizacao".to_string(), json!(now_iso()));
    cols
}

/// `igrejas` table row. Nested address/pastor objects live in jsonb columns
/// and keep the application's camelCase inner fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChurchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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
    pub data_cadastro: Option<String>,
    pub data_atualizacao: Option<String>,
}

impl From<ChurchRow> for Church {
    fn from(row: ChurchRow) -> Self {
        Church {
            id: row.id.unwrap_or_default(),
            classificacao: row.classificacao.unwrap_or_default(),
            nome: row.nome.unwrap_or_default(),
            tipo: row.tipo.unwrap_or_default(),
            endereco: row.endereco.unwrap_or_default(),
            pastor: row.pastor.unwrap_or_default(),
            membros_iniciais: row.membros_iniciais.unwrap_or(0),
            membros_atuais: row.membros_atuais.unwrap_or(0),
            almas_batizadas: row.almas_batizadas.unwrap_or(0),
            tem_escola_criancas: row.tem_escola_criancas.unwrap_or(false),
            criancas_quantidade: row.criancas_quantidade.unwrap_or(0),
            dias_funcionamento: row.dias_funcionamento.unwrap_or_default(),
            data_cadastro: row.data_cadastro.unwrap_or_default(),
            data_atualizacao: row.data_atualizacao.unwrap_or_default(),
        }
    }
}

impl From<&Church> for ChurchRow {
    fn from(c: &Church) -> Self {
        ChurchRow {
            id: (!c.id.is_empty()).then(|| c.id.clone()),
            classificacao: Some(c.classificacao.clone()),
            nome: Some(c.nome.clone()),
            tipo: Some(c.tipo.clone()),
            endereco: Some(c.endereco.clone()),
            pastor: Some(c.pastor.clone()),
            membros_iniciais: Some(c.membros_iniciais),
            membros_atuais: Some(c.membros_atuais),
            almas_batizadas: Some(c.almas_batizadas),
            tem_escola_criancas: Some(c.tem_escola_criancas),
            criancas_quantidade: Some(c.criancas_quantidade),
            dias_funcionamento: Some(c.dias_funcionamento.clone()),
            data_cadastro: (!c.data_cadastro.is_empty()).then(|| c.data_cadastro.clone()),
            data_atualizacao: (!c.data_atualizacao.is_empty()).then(|| c.data_atualizacao.clone()),
        }
    }
}

impl ChurchRow {
    /// Build an insert row: identity stripped, timestamps client-stamped
    pub fn for_insert(church: &Church) -> Self {
        let now = now_iso();
        let mut row = ChurchRow::from(church);
        row.id = None;
        row.data_cadastro = Some(now.clone());
        row.data_atualizacao = Some(now);
        row
    }
}

/// Partial-update column map for churches
pub fn church_update_columns(update: &ChurchUpdate) -> Map<String, Value> {
    let mut cols = Map::new();
    macro_rules! col {
        ($field:ident) => {
            if let Some(v) = &update.$field {
                cols.insert(stringify!($field).to_string(), json!(v));
            }
        };
    }
    col!(classificacao);
    col!(nome);
    col!(tipo);
    col!(endereco);
    col!(pastor);
    col!(membros_iniciais);
    col!(membros_atuais);
    col!(almas_batizadas);
    col!(tem_escola_criancas);
    col!(criancas_quantidade);
    col!(dias_funcionamento);
    cols.insert("data_atualizacao".to_string(), json!(now_iso()));
    cols
}

#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_masters_creator_type ON masters(creator_id, master_type, id);
        CREATE INDEX IF NOT EXISTS idx_master_agents_creator ON master_agents(creator_id, id);
        CREATE INDEX IF NOT EXISTS idx_master_detail_relations_master ON master_detail_relations(master_id, master_detail_id);
        CREATE INDEX IF NOT EXISTS idx_master_detail_relations_detail ON master_detail_relations(master_detail_id);
        CREATE INDEX IF NOT EXISTS idx_master_item_relations_master ON master_item_relations(master_id, master_item_id);
        CREATE INDEX IF NOT EXISTS idx_master_item_relations_item ON master_item_relations(master_item_id);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_master_item_detail_cell
          ON master_item_detail_relations(master_item_id, master_detail_id);
        CREATE INDEX IF NOT EXISTS idx_master_item_detail_detail ON master_item_detail_relations(master_detail_id);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_master_agent_relations_master ON master_agent_relations(master_id);
        CREATE INDEX IF NOT EXISTS idx_conversation_agent_relations_agent ON conversation_agent_relations(agent_id);
"#;

mod team_formation;
